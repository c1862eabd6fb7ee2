//! `folio mailto`: compose the contact form's mail link.

use crate::cli::common::{load_config, load_content, print_json, CliResult};
use crate::contact::ContactForm;
use clap::Args;
use serde::Serialize;

/// Compose the mail link the contact form would open
#[derive(Debug, Clone, Args)]
pub struct MailtoArgs {
    /// Sender's name
    #[arg(long, default_value = "")]
    name: String,

    /// Sender's email address
    #[arg(long, default_value = "")]
    email: String,

    /// Message body
    #[arg(long, default_value = "")]
    message: String,

    /// Recipient (defaults to the content's contact address)
    #[arg(long, value_name = "ADDRESS")]
    to: Option<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct MailtoOutput<'a> {
    recipient: &'a str,
    subject: &'a str,
    body: &'a str,
    href: String,
}

impl MailtoArgs {
    /// Execute the mailto command
    pub fn execute(&self) -> CliResult<()> {
        let recipient = match &self.to {
            Some(to) => to.clone(),
            None => {
                let config = load_config()?;
                load_content(config.paths.content.as_deref())?.contact.email
            }
        };

        let form = ContactForm::new(&self.name, &self.email, &self.message);
        let link = form.mail_link(&recipient);

        if self.json {
            print_json(&MailtoOutput {
                recipient: link.recipient(),
                subject: link.subject(),
                body: link.body(),
                href: link.href(),
            })?;
        } else {
            println!("{link}");
        }

        Ok(())
    }
}
