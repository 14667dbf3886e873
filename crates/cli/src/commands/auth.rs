//! Session and profile commands.
//!
//! The session is a demo: credentials are accepted as-is and no account
//! exists anywhere. What these commands really manage is the persisted
//! profile.
//!
//! # Usage
//!
//! ```bash
//! fitgear auth login -e you@example.com
//! fitgear auth register -n "Jane Lifter" -e jane@example.com
//! fitgear auth whoami
//! fitgear profile update --phone 555-000-1111
//! fitgear auth logout
//! ```

use clap::Subcommand;

use fitgear_core::Email;
use fitgear_storefront::error::{AppError, Result};
use fitgear_storefront::models::{ProfileUpdate, User};

use super::{load_config, open_auth};

/// Session subcommands.
#[derive(Subcommand)]
pub enum AuthAction {
    /// Sign in with an email address
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (accepted, never checked)
        #[arg(short, long, default_value = "")]
        password: String,
    },
    /// Create a demo account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Password (accepted, never checked)
        #[arg(short, long, default_value = "")]
        password: String,
    },
    /// End the session
    Logout,
    /// Show who is signed in
    Whoami,
}

/// Profile subcommands.
#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the signed-in profile
    Show,
    /// Update profile fields
    Update {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New shipping address
        #[arg(long)]
        address: Option<String>,
    },
}

/// Run a session subcommand.
pub fn dispatch(action: AuthAction) -> Result<()> {
    match action {
        AuthAction::Login { email, password } => login(&email, &password),
        AuthAction::Register {
            name,
            email,
            password,
        } => register(&name, &email, &password),
        AuthAction::Logout => logout(),
        AuthAction::Whoami => whoami(),
    }
}

/// Run a profile subcommand.
pub fn dispatch_profile(action: ProfileAction) -> Result<()> {
    match action {
        ProfileAction::Show => show_profile(),
        ProfileAction::Update {
            name,
            email,
            phone,
            address,
        } => update_profile(name, email, phone, address),
    }
}

#[allow(clippy::print_stdout)]
fn login(email: &str, password: &str) -> Result<()> {
    let email = parse_email(email)?;
    let config = load_config()?;
    let mut auth = open_auth(&config)?;

    auth.login(email, password);
    if let Some(user) = auth.current_user() {
        println!("Signed in as {} <{}>.", user.name, user.email);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn register(name: &str, email: &str, password: &str) -> Result<()> {
    let email = parse_email(email)?;
    let config = load_config()?;
    let mut auth = open_auth(&config)?;

    auth.register(name, email, password);
    if let Some(user) = auth.current_user() {
        println!("Welcome, {}! You are signed in.", user.name);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn logout() -> Result<()> {
    let config = load_config()?;
    let mut auth = open_auth(&config)?;

    auth.logout();
    println!("Signed out.");
    Ok(())
}

#[allow(clippy::print_stdout)]
fn whoami() -> Result<()> {
    let config = load_config()?;
    let auth = open_auth(&config)?;

    match auth.current_user() {
        Some(user) => println!("{} <{}>", user.name, user.email),
        None => println!("Not signed in."),
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn show_profile() -> Result<()> {
    let config = load_config()?;
    let auth = open_auth(&config)?;

    match auth.current_user() {
        Some(user) => print_profile(user),
        None => println!("Not signed in."),
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn update_profile(
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
) -> Result<()> {
    let email = email.as_deref().map(parse_email).transpose()?;
    let config = load_config()?;
    let mut auth = open_auth(&config)?;

    if !auth.is_logged_in() {
        println!("Not signed in; nothing to update.");
        return Ok(());
    }

    let update = ProfileUpdate {
        name,
        email,
        phone,
        address,
    };
    if update.is_empty() {
        println!("Nothing to update.");
        return Ok(());
    }

    auth.update_profile(update);
    if let Some(user) = auth.current_user() {
        print_profile(user);
    }
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_profile(user: &User) {
    println!("Name:    {}", user.name);
    println!("Email:   {}", user.email);
    println!("Phone:   {}", user.phone.as_deref().unwrap_or("-"));
    println!("Address: {}", user.address.as_deref().unwrap_or("-"));
}

/// Parse a CLI email argument at the input boundary.
fn parse_email(raw: &str) -> Result<Email> {
    Email::parse(raw).map_err(|e| AppError::InvalidInput(format!("email {raw:?}: {e}")))
}
