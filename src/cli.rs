use clap::Subcommand;

mod check;
mod config;
mod contact;
mod dividends;
mod experience;
mod profile;
mod projects;
mod show;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check the data source and configuration")]
    Check(Box<check::CheckCommand>),

    #[command(subcommand, about = "Configure folio")]
    Config(config::ConfigCommand),

    #[command(about = "Compose a contact email link")]
    Contact(Box<contact::ContactCommand>),

    #[command(about = "Show PSE dividend declarations")]
    #[clap(visible_aliases = &["div"])]
    Dividends(Box<dividends::DividendsCommand>),

    #[command(about = "Show career experience")]
    #[clap(visible_aliases = &["exp"])]
    Experience(Box<experience::ExperienceCommand>),

    #[command(about = "Show the profile and skills")]
    Profile(Box<profile::ProfileCommand>),

    #[command(about = "Show projects")]
    Projects(Box<projects::ProjectsCommand>),

    #[command(about = "Open the portfolio viewer window")]
    Show(Box<show::ShowCommand>),
}
