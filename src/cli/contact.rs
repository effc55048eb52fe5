use colored::Colorize;
use folio::profile::{self, ContactForm};

#[derive(clap::Args)]
pub struct ContactCommand {
    #[arg(short = 'n', long = "name", default_value = "", help = "Sender name")]
    name: String,

    #[arg(
        short = 'e',
        long = "email",
        default_value = "",
        help = "Sender email address"
    )]
    email: String,

    #[arg(
        short = 's',
        long = "subject",
        default_value = "",
        help = "Subject, falls back to 'Portfolio Contact' when empty"
    )]
    subject: String,

    #[arg(short = 'm', long = "message", default_value = "", help = "Message body")]
    message: String,
}

impl ContactCommand {
    pub async fn exec(&self) {
        let form = ContactForm {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        };

        match profile::profile().mailto_link(&form) {
            Ok(link) => {
                println!("{link}");
            }
            Err(err) => {
                println!("[!] {}", err.to_string().red());
            }
        }
    }
}
