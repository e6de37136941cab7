use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(name = "roster", version)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in with an email and password
    Login(LoginArgs),
    /// Create an account and log in
    Signup(SignupArgs),
    /// Update a user's password
    PasswordUpdate(PasswordUpdateArgs),
    /// Create and list employee records
    Employee {
        #[clap(subcommand)]
        command: EmployeeCommand,
    },
    /// Show the logged-in user
    Whoami,
    /// Log out and clear the persisted session
    Logout,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[clap(long)]
    pub email: String,

    #[clap(long)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct SignupArgs {
    #[clap(long)]
    pub username: String,

    #[clap(long)]
    pub email: String,

    #[clap(long)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct PasswordUpdateArgs {
    #[clap(long)]
    pub email: String,

    #[clap(long)]
    pub new_password: String,

    #[clap(long)]
    pub confirm_new_password: String,
}

#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// Create an employee record
    Add(EmployeeAddArgs),
    /// List employee records
    List,
}

#[derive(Debug, Args)]
pub struct EmployeeAddArgs {
    #[clap(long)]
    pub name: String,

    #[clap(long)]
    pub designation: String,

    #[clap(long)]
    pub company: String,
}
