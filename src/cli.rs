use clap::{Parser, Subcommand};

/// `send-whatsapp` - WhatsApp click-to-chat links from the command line.
#[derive(Parser, Debug)]
#[command(name = "send-whatsapp")]
#[command(author = "haru0416-dev")]
#[command(version = "1.0.0")]
#[command(about = "Generate WhatsApp click-to-chat deep links.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the bare deep-link URL for a phone/prefix/title triple
    Link {
        /// Destination number, digits with international prefix (falls back to settings)
        #[arg(short, long)]
        phone: Option<String>,

        /// Text placed before the title in the prefilled message
        #[arg(long)]
        prefix: Option<String>,

        /// Title to mention in the message
        #[arg(short, long)]
        title: String,
    },

    /// Render the embeddable directive as HTML against a demo content context
    Render {
        /// Override phone number (directive attribute `phone`)
        #[arg(long)]
        phone: Option<String>,

        /// Override message prefix (directive attribute `prefix`)
        #[arg(long)]
        prefix: Option<String>,

        /// Override link label (directive attribute `text`)
        #[arg(long)]
        text: Option<String>,

        /// Display mode: text, button_small, button_medium, button_large
        #[arg(long)]
        mode: Option<String>,

        /// Explicit content id (directive attribute `id`)
        #[arg(long)]
        content_id: Option<String>,

        /// Title of the ambient content item the directive is rendered in
        #[arg(long)]
        title: Option<String>,

        /// Render the directive this many times (shows stylesheet idempotence)
        #[arg(long, default_value = "1")]
        repeat: usize,
    },

    /// Show or change stored settings
    Settings {
        #[command(subcommand)]
        settings_command: SettingsCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Print the stored configuration
    Show,

    /// Set one key: phone_number, text_prefix, link_text or display_mode
    Set { key: String, value: String },
}
