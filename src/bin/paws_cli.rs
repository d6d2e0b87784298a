//! Pets & Paws Command Line Interface
//!
//! Terminal front-end for the adoption client: browse and filter listings,
//! sign in or up, publish pets as an NGO, and poke the backend's health.
//!
//! # Usage
//!
//! ```bash
//! # Browse dogs near Lisboa, young ones only
//! paws_cli browse --species dog --age 0-2 --location Lisboa
//!
//! # Sign in and check who you are
//! paws_cli login --email ana@example.com --password hunter22
//! paws_cli whoami
//!
//! # Publish a listing (NGO account required)
//! paws_cli add-pet --name Rex --species dog --age 3 \
//!     --location Lisboa --image ./rex.jpg
//!
//! # Interactive session
//! paws_cli shell
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use paws_client::api::{ImageUpload, PawsClient, PetApi};
use paws_client::forms::{AddPetForm, AuthForm, AuthMode, FieldErrors, Navigation};
use paws_client::listing::ListingView;
use paws_client::shell::{NavAction, NavShell};
use paws_client::{AgeBucket, Pet, Species, SpeciesFilter, UserRole};

#[derive(Parser)]
#[command(name = "paws_cli")]
#[command(version = "0.1.0")]
#[command(about = "Adoption listing client for the Pets & Paws API")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: json or pretty (default)
    #[arg(long, short = 'o', global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Subcommand)]
enum Commands {
    /// List adoptable pets, with optional filters
    Browse {
        /// Species filter: all, dog, cat
        #[arg(long, default_value = "all")]
        species: String,

        /// Age bucket, applied locally: all, 0-2, 3-5, 6+
        #[arg(long, default_value = "all")]
        age: String,

        /// Location substring, matched server-side
        #[arg(long)]
        location: Option<String>,

        /// Page size requested from the server
        #[arg(long)]
        limit: Option<u32>,

        /// Offset into the server result
        #[arg(long)]
        skip: Option<u32>,
    },

    /// Show one pet in detail, including the listing NGO's contact
    Pet {
        /// Pet identifier
        id: String,
    },

    /// Sign in and persist the session
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Register an account and persist the session
    Signup {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        /// Defaults to --password when omitted
        #[arg(long)]
        confirm_password: Option<String>,

        /// Account role: adopter or ngo
        #[arg(long, default_value = "adopter")]
        role: String,

        /// Full name (adopter accounts)
        #[arg(long)]
        name: Option<String>,

        /// Organization name (ngo accounts)
        #[arg(long)]
        organization: Option<String>,
    },

    /// Publish a pet listing (NGO accounts only)
    AddPet {
        #[arg(long)]
        name: String,

        /// dog or cat
        #[arg(long)]
        species: String,

        /// Age in whole years
        #[arg(long)]
        age: String,

        #[arg(long)]
        location: String,

        /// Photo file (jpeg, png or webp, max 10MB)
        #[arg(long)]
        image: PathBuf,

        #[arg(long)]
        medical_notes: Option<String>,

        /// Listings default to vaccinated
        #[arg(long)]
        not_vaccinated: bool,

        /// Listings default to neutered
        #[arg(long)]
        not_neutered: bool,
    },

    /// Listing statistics for the signed-in NGO
    Dashboard,

    /// Show the locally stored session
    Whoami {
        /// Verify the session against the server instead
        #[arg(long)]
        remote: bool,
    },

    /// Sign out; the local session is cleared even if the server is down
    Logout,

    /// Check the backend is up
    Health,

    /// Interactive session
    Shell,
}

// =============================================================================
// MAIN
// =============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    let client = match PawsClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}: {:#}", "error".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Browse {
            species,
            age,
            location,
            limit,
            skip,
        } => cmd_browse(&client, &species, &age, location, limit, skip, cli.format).await,
        Commands::Pet { id } => cmd_pet(&client, &id, cli.format).await,
        Commands::Login { email, password } => {
            cmd_login(&client, &email, &password, cli.format).await
        }
        Commands::Signup {
            email,
            password,
            confirm_password,
            role,
            name,
            organization,
        } => {
            cmd_signup(
                &client,
                &email,
                &password,
                confirm_password,
                &role,
                name,
                organization,
                cli.format,
            )
            .await
        }
        Commands::AddPet {
            name,
            species,
            age,
            location,
            image,
            medical_notes,
            not_vaccinated,
            not_neutered,
        } => {
            cmd_add_pet(
                &client,
                &name,
                &species,
                &age,
                &location,
                &image,
                medical_notes,
                !not_vaccinated,
                !not_neutered,
                cli.format,
            )
            .await
        }
        Commands::Dashboard => cmd_dashboard(&client, cli.format).await,
        Commands::Whoami { remote } => cmd_whoami(&client, remote, cli.format).await,
        Commands::Logout => cmd_logout(&client, cli.format).await,
        Commands::Health => cmd_health(&client, cli.format).await,
        Commands::Shell => cmd_shell(&client, cli.quiet).await,
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                println!(r#"{{"error": "{}"}}"#, e.replace('"', "\\\""));
            } else {
                eprintln!("{}: {}", "error".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

async fn cmd_browse(
    client: &PawsClient,
    species: &str,
    age: &str,
    location: Option<String>,
    limit: Option<u32>,
    skip: Option<u32>,
    format: OutputFormat,
) -> Result<(), String> {
    let mut view = ListingView::new();
    view.set_species(species.parse::<SpeciesFilter>()?);
    view.set_age_bucket(age.parse::<AgeBucket>()?);
    if let Some(location) = location {
        view.set_location(location);
    }
    if limit.is_some() || skip.is_some() {
        view.set_page_window(limit, skip);
    }

    view.refresh_if_stale(client)
        .await
        .map_err(|e| e.to_string())?;

    render_listing(&view, format);
    Ok(())
}

async fn cmd_pet(client: &PawsClient, id: &str, format: OutputFormat) -> Result<(), String> {
    let pet = client.get_pet(id).await.map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Json => print_json(&pet)?,
        OutputFormat::Pretty => render_pet_detail(&pet),
    }
    Ok(())
}

async fn cmd_login(
    client: &PawsClient,
    email: &str,
    password: &str,
    format: OutputFormat,
) -> Result<(), String> {
    let mut form = AuthForm::new(AuthMode::SignIn);
    form.set_email(email);
    form.set_password(password);

    match form.submit(client).await {
        Some(Navigation::To(target)) => {
            report_signed_in(client, &target, format)?;
            Ok(())
        }
        Some(Navigation::Home) => {
            report_signed_in(client, "/", format)?;
            Ok(())
        }
        None => Err(form_failure(form.errors(), form.submit_error())),
    }
}

#[allow(clippy::too_many_arguments)]
async fn cmd_signup(
    client: &PawsClient,
    email: &str,
    password: &str,
    confirm_password: Option<String>,
    role: &str,
    name: Option<String>,
    organization: Option<String>,
    format: OutputFormat,
) -> Result<(), String> {
    let role = parse_role(role)?;

    let mut form = AuthForm::new(AuthMode::SignUp);
    form.set_role(role);
    form.set_email(email);
    form.set_password(password);
    form.set_confirm_password(confirm_password.unwrap_or_else(|| password.to_string()));
    if let Some(name) = name {
        form.set_name(name);
    }
    if let Some(organization) = organization {
        form.set_organization_name(organization);
    }

    match form.submit(client).await {
        Some(Navigation::To(target)) => {
            report_signed_in(client, &target, format)?;
            Ok(())
        }
        Some(Navigation::Home) => {
            report_signed_in(client, "/", format)?;
            Ok(())
        }
        None => Err(form_failure(form.errors(), form.submit_error())),
    }
}

#[allow(clippy::too_many_arguments)]
async fn cmd_add_pet(
    client: &PawsClient,
    name: &str,
    species: &str,
    age: &str,
    location: &str,
    image: &Path,
    medical_notes: Option<String>,
    vaccinated: bool,
    neutered: bool,
    format: OutputFormat,
) -> Result<(), String> {
    let species = species.parse::<Species>()?;
    let upload = load_image(image)?;

    let mut form = AddPetForm::new();
    form.set_name(name);
    form.set_species(species);
    form.set_age(age);
    form.set_location(location);
    form.attach_image(upload);
    form.set_vaccinated(vaccinated);
    form.set_neutered(neutered);
    if let Some(notes) = medical_notes {
        form.set_medical_notes(notes);
    }

    match form.submit(client).await {
        Some(submission) => {
            match format {
                OutputFormat::Json => print_json(&submission.pet)?,
                OutputFormat::Pretty => {
                    println!("{} Pet added successfully!", "OK".green());
                    render_pet_detail(&submission.pet);
                }
            }
            Ok(())
        }
        None => Err(form_failure(form.errors(), form.submit_error())),
    }
}

async fn cmd_dashboard(client: &PawsClient, format: OutputFormat) -> Result<(), String> {
    let dashboard = client.ngo_dashboard().await.map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Json => print_json(&dashboard)?,
        OutputFormat::Pretty => {
            println!("{} NGO dashboard", "OK".green());
            print_json(&dashboard)?;
        }
    }
    Ok(())
}

async fn cmd_whoami(client: &PawsClient, remote: bool, format: OutputFormat) -> Result<(), String> {
    if remote {
        let user = client.me().await.map_err(|e| e.to_string())?;
        match format {
            OutputFormat::Json => print_json(&user)?,
            OutputFormat::Pretty => {
                println!(
                    "{} {} <{}> ({}), verified by the server",
                    "OK".green(),
                    user.name,
                    user.email,
                    user.role
                );
            }
        }
        return Ok(());
    }

    match client.store().load() {
        Some(session) => match format {
            OutputFormat::Json => print_json(&session.user)?,
            OutputFormat::Pretty => {
                println!(
                    "{} {} <{}> ({})",
                    "OK".green(),
                    session.user.name,
                    session.user.email,
                    session.user.role
                );
            }
        },
        None => match format {
            OutputFormat::Json => println!("null"),
            OutputFormat::Pretty => println!("Not signed in."),
        },
    }
    Ok(())
}

async fn cmd_logout(client: &PawsClient, format: OutputFormat) -> Result<(), String> {
    match client.logout().await {
        Ok(()) => {
            if format == OutputFormat::Pretty {
                println!("{} Signed out.", "OK".green());
            }
        }
        Err(e) => {
            // The local session is already gone; the server just never
            // heard about it.
            eprintln!(
                "{}: {}; local session cleared anyway",
                "warn".yellow().bold(),
                e
            );
        }
    }
    Ok(())
}

async fn cmd_health(client: &PawsClient, format: OutputFormat) -> Result<(), String> {
    let probe = client.health().await.map_err(|e| e.to_string())?;

    match format {
        OutputFormat::Json => print_json(&probe)?,
        OutputFormat::Pretty => println!(
            "{} {} - {}",
            "OK".green(),
            probe.status,
            probe.message.as_deref().unwrap_or("no message")
        ),
    }
    Ok(())
}

// =============================================================================
// INTERACTIVE SHELL
// =============================================================================

async fn cmd_shell(client: &PawsClient, quiet: bool) -> Result<(), String> {
    use rustyline::error::ReadlineError;

    if !atty::is(atty::Stream::Stdin) {
        return Err("the interactive shell needs a terminal; use the one-shot commands instead".into());
    }

    let nav = NavShell::new(client.store().clone());
    let mut listing = ListingView::new();
    let mut editor =
        rustyline::DefaultEditor::new().map_err(|e| format!("cannot start shell: {e}"))?;

    if !quiet {
        println!("Pets & Paws. Type 'help' for commands, 'quit' to leave.");
    }

    loop {
        let prompt = match nav.user() {
            Some(user) => format!("{}@paws> ", user.name),
            None => "paws> ".to_string(),
        };

        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("readline failed: {e}")),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = editor.add_history_entry(line);

        if line == "quit" || line == "exit" {
            break;
        }

        if let Err(e) = dispatch_shell_line(client, &nav, &mut listing, &mut editor, line).await {
            eprintln!("{}: {}", "error".red().bold(), e);
        }
    }

    Ok(())
}

async fn dispatch_shell_line(
    client: &PawsClient,
    nav: &NavShell,
    listing: &mut ListingView,
    editor: &mut rustyline::DefaultEditor,
    line: &str,
) -> Result<(), String> {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command {
        "help" => {
            shell_help(nav);
            Ok(())
        }
        "browse" => {
            listing.refresh(client).await.map_err(|e| e.to_string())?;
            render_listing(listing, OutputFormat::Pretty);
            Ok(())
        }
        "species" => {
            listing.set_species(rest.parse::<SpeciesFilter>()?);
            refresh_and_render(client, listing).await
        }
        "age" => {
            // Client-side stage: narrows the already-fetched page, no call.
            listing.set_age_bucket(rest.parse::<AgeBucket>()?);
            render_listing(listing, OutputFormat::Pretty);
            Ok(())
        }
        "location" => {
            listing.set_location(rest);
            refresh_and_render(client, listing).await
        }
        "clear" => {
            listing.clear_filters();
            refresh_and_render(client, listing).await
        }
        "pet" => {
            if rest.is_empty() {
                return Err("usage: pet <id>".into());
            }
            let pet = client.get_pet(rest).await.map_err(|e| e.to_string())?;
            render_pet_detail(&pet);
            Ok(())
        }
        "login" => shell_login(client, editor, rest).await,
        "signup" => shell_signup(client, editor).await,
        "add-pet" => shell_add_pet(client, nav, listing, editor).await,
        "whoami" => {
            match nav.user() {
                Some(user) => println!("{} <{}> ({})", user.name, user.email, user.role),
                None => println!("Not signed in."),
            }
            Ok(())
        }
        "dashboard" => {
            if !nav.allows(NavAction::Dashboard) {
                return Err("dashboard is for signed-in NGO accounts".into());
            }
            let dashboard = client.ngo_dashboard().await.map_err(|e| e.to_string())?;
            print_json(&dashboard)
        }
        "logout" => {
            match nav.logout(client).await {
                Ok(Navigation::Home) | Ok(Navigation::To(_)) => {
                    println!("{} Signed out.", "OK".green())
                }
                Err(e) => eprintln!(
                    "{}: {}; local session cleared anyway",
                    "warn".yellow().bold(),
                    e
                ),
            }
            // Landing back on the home listing.
            listing.clear_filters();
            refresh_and_render(client, listing).await
        }
        other => Err(format!("unknown command '{other}'; try 'help'")),
    }
}

fn shell_help(nav: &NavShell) {
    println!("Navigation for this session:");
    for action in nav.actions() {
        println!("  - {action}");
    }
    println!();
    println!("Commands:");
    println!("  browse                 fetch and show the listing");
    println!("  species <all|dog|cat>  server-side filter, triggers a fetch");
    println!("  location <text>        server-side filter, triggers a fetch");
    println!("  age <all|0-2|3-5|6+>   local filter, no fetch");
    println!("  clear                  reset all filters");
    println!("  pet <id>               show one pet in detail");
    println!("  login [email]          sign in");
    println!("  signup                 create an account");
    println!("  add-pet                publish a listing (NGO)");
    println!("  dashboard              NGO statistics");
    println!("  whoami / logout / quit");
}

async fn refresh_and_render(client: &PawsClient, listing: &mut ListingView) -> Result<(), String> {
    listing
        .refresh_if_stale(client)
        .await
        .map_err(|e| e.to_string())?;
    render_listing(listing, OutputFormat::Pretty);
    Ok(())
}

async fn shell_login(
    client: &PawsClient,
    editor: &mut rustyline::DefaultEditor,
    rest: &str,
) -> Result<(), String> {
    let email = if rest.is_empty() {
        ask(editor, "email: ")?
    } else {
        rest.to_string()
    };
    let password = ask(editor, "password: ")?;

    let mut form = AuthForm::new(AuthMode::SignIn);
    form.set_email(email);
    form.set_password(password);

    match form.submit(client).await {
        Some(navigation) => {
            announce_navigation(client, &navigation);
            Ok(())
        }
        None => Err(form_failure(form.errors(), form.submit_error())),
    }
}

async fn shell_signup(
    client: &PawsClient,
    editor: &mut rustyline::DefaultEditor,
) -> Result<(), String> {
    let role = parse_role(&ask(editor, "role (adopter/ngo): ")?)?;

    let mut form = AuthForm::new(AuthMode::SignUp);
    form.set_role(role);
    form.set_email(ask(editor, "email: ")?);
    form.set_password(ask(editor, "password: ")?);
    form.set_confirm_password(ask(editor, "confirm password: ")?);
    match role {
        UserRole::Adopter => form.set_name(ask(editor, "full name: ")?),
        UserRole::Ngo => form.set_organization_name(ask(editor, "organization name: ")?),
    }

    match form.submit(client).await {
        Some(navigation) => {
            announce_navigation(client, &navigation);
            Ok(())
        }
        None => Err(form_failure(form.errors(), form.submit_error())),
    }
}

async fn shell_add_pet(
    client: &PawsClient,
    nav: &NavShell,
    listing: &mut ListingView,
    editor: &mut rustyline::DefaultEditor,
) -> Result<(), String> {
    if !nav.allows(NavAction::AddPet) {
        return Err("add-pet is for signed-in NGO accounts".into());
    }

    let mut form = AddPetForm::new();
    form.set_name(ask(editor, "pet name: ")?);
    form.set_species(ask(editor, "species (dog/cat): ")?.parse::<Species>()?);
    form.set_age(ask(editor, "age (years): ")?);
    form.set_location(ask(editor, "location: ")?);
    form.attach_image(load_image(Path::new(&ask(editor, "photo path: ")?))?);
    form.set_vaccinated(ask_yes_no(editor, "vaccinated [Y/n]: ", true)?);
    form.set_neutered(ask_yes_no(editor, "neutered [Y/n]: ", true)?);
    let notes = ask(editor, "medical notes (optional): ")?;
    if !notes.is_empty() {
        form.set_medical_notes(notes);
    }

    match form.submit(client).await {
        Some(submission) => {
            println!("{} Pet added successfully!", "OK".green());
            println!("Redirecting you back home...");
            tokio::time::sleep(submission.redirect_after).await;

            // Navigation::Home: land on a fresh listing.
            listing.clear_filters();
            listing.refresh(client).await.map_err(|e| e.to_string())?;
            render_listing(listing, OutputFormat::Pretty);
            Ok(())
        }
        None => Err(form_failure(form.errors(), form.submit_error())),
    }
}

fn ask(editor: &mut rustyline::DefaultEditor, prompt: &str) -> Result<String, String> {
    editor
        .readline(prompt)
        .map(|line| line.trim().to_string())
        .map_err(|_| "cancelled".to_string())
}

fn ask_yes_no(
    editor: &mut rustyline::DefaultEditor,
    prompt: &str,
    default: bool,
) -> Result<bool, String> {
    let answer = ask(editor, prompt)?;
    match answer.to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(format!("expected y or n, got '{other}'")),
    }
}

fn announce_navigation(client: &PawsClient, navigation: &Navigation) {
    let target = match navigation {
        Navigation::Home => "/",
        Navigation::To(target) => target.as_str(),
    };
    match client.store().load() {
        Some(session) => println!(
            "{} Signed in as {} ({}) → {}",
            "OK".green(),
            session.user.name,
            session.user.role,
            target
        ),
        None => println!("{} Signed in → {}", "OK".green(), target),
    }
}

// =============================================================================
// HELPERS
// =============================================================================

fn parse_role(raw: &str) -> Result<UserRole, String> {
    match raw.to_ascii_lowercase().as_str() {
        "adopter" => Ok(UserRole::Adopter),
        "ngo" => Ok(UserRole::Ngo),
        other => Err(format!("unknown role '{other}' (expected adopter or ngo)")),
    }
}

/// Read the photo and infer its content type from the extension. Unknown
/// extensions are passed through for the form's whitelist to reject with
/// the canonical message.
fn load_image(path: &Path) -> Result<ImageUpload, String> {
    let bytes =
        std::fs::read(path).map_err(|e| format!("cannot read '{}': {e}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let content_type = match path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    };

    Ok(ImageUpload {
        file_name,
        content_type: content_type.to_string(),
        bytes,
    })
}

/// One line per field error, plus the submit error when the server said no.
fn form_failure(errors: &FieldErrors, submit_error: Option<&str>) -> String {
    let mut lines: Vec<String> = errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect();
    if let Some(message) = submit_error {
        lines.push(message.to_string());
    }
    if lines.is_empty() {
        "submission failed".to_string()
    } else {
        lines.join("\n")
    }
}

fn report_signed_in(
    client: &PawsClient,
    target: &str,
    format: OutputFormat,
) -> Result<(), String> {
    match client.store().load() {
        Some(session) => match format {
            OutputFormat::Json => print_json(&serde_json::json!({
                "user": session.user,
                "redirect_url": target,
            })),
            OutputFormat::Pretty => {
                println!(
                    "{} Signed in as {} ({}) → {}",
                    "OK".green(),
                    session.user.name,
                    session.user.role,
                    target
                );
                Ok(())
            }
        },
        // Persisting locally can fail without failing the sign-in.
        None => {
            println!("{} Signed in → {}", "OK".green(), target);
            Ok(())
        }
    }
}

fn render_listing(view: &ListingView, format: OutputFormat) {
    if format == OutputFormat::Json {
        let pets: Vec<&Pet> = view.visible();
        let _ = print_json(&serde_json::json!({
            "shown": pets.len(),
            "server_total": view.server_total(),
            "pets": pets,
        }));
        return;
    }

    let filter = view.filter();
    println!(
        "{} {} of {} pet(s) shown (species {}, age {}, location {})",
        "OK".green(),
        view.result_count(),
        view.server_total(),
        filter.species,
        filter.age,
        if filter.location.is_empty() {
            "any".to_string()
        } else {
            format!("\"{}\"", filter.location)
        }
    );
    for pet in view.visible() {
        println!(
            "  {:<26} {:<12} {:<4} {:>2} yrs  {}",
            pet.id, pet.name, pet.species, pet.age, pet.location
        );
    }
}

fn render_pet_detail(pet: &Pet) {
    println!("{} - {}, {} yrs", pet.name.bold(), pet.species, pet.age);
    println!("  id:         {}", pet.id);
    println!("  location:   {}", pet.location);
    println!(
        "  vaccinated: {}   neutered: {}",
        yes_no(pet.vaccinated),
        yes_no(pet.neutered)
    );
    if let Some(notes) = &pet.medical_notes {
        println!("  notes:      {notes}");
    }
    println!("  listed:     {}", pet.created_at.format("%Y-%m-%d"));
    println!("  photo:      {}", pet.image_url);
    if let Some(ngo_name) = &pet.ngo_name {
        println!(
            "  contact:    {} <{}>",
            ngo_name,
            pet.ngo_email.as_deref().unwrap_or("no email")
        );
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))?
    );
    Ok(())
}
