mod translator;

use clap::{Parser, Subcommand};
use glossa_core::{config, Language};
use glossa_locale::{install_bundled_locales, load_catalog, Catalog};
use glossa_template::{Arg, Options};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};

use translator::Translator;

#[derive(Parser)]
#[command(
    name = "glossa",
    version,
    about = "Glossa — localized templates for the contest platform"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a key and print the interpolated text.
    Translate {
        /// Language code (defaults to the configured default language).
        #[arg(short, long)]
        lang: Option<Language>,
        /// Use the locale files compiled into the binary.
        #[arg(long)]
        bundled: bool,
        /// Dotted key path, e.g. `login.siteRestriction`.
        key: String,
        /// Values for `%1`, `%2`, ... in order.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// List every key defined for a language.
    Keys {
        /// Language code (defaults to the configured default language).
        #[arg(short, long)]
        lang: Option<Language>,
        /// Use the locale files compiled into the binary.
        #[arg(long)]
        bundled: bool,
    },
    /// Install the bundled locale files into the configured directory.
    Init,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Provisional filter so messages from loading the config are not lost.
    let env_filter = EnvFilter::try_from_default_env().ok();
    let has_env_filter = env_filter.is_some();
    let (subscriber, filter) = logging(
        std::io::stderr,
        env_filter.unwrap_or_else(|| EnvFilter::new("info")),
    );
    subscriber.init();

    let cfg = config::load(&cli.config)?;
    if !has_env_filter {
        filter.reload(EnvFilter::new(&cfg.glossa.log_level))?;
    }

    match cli.command {
        Commands::Translate {
            lang,
            bundled,
            key,
            args,
        } => {
            let catalog = open_catalog(&cfg, bundled).await?;
            let language = lang.unwrap_or(catalog.default_language());
            let translator = Translator::new(catalog, Options::from(&cfg.interpolation));
            let text = if args.is_empty() {
                translator.text(language, &key)?
            } else {
                let values: Vec<Arg> = args.iter().map(|a| Arg::infer(a)).collect();
                translator.translate(language, &key, &values)?.render()
            };
            println!("{text}");
        }
        Commands::Keys { lang, bundled } => {
            let catalog = open_catalog(&cfg, bundled).await?;
            let language = lang.unwrap_or(catalog.default_language());
            let Some(tree) = catalog.get(language) else {
                anyhow::bail!(
                    "language {language} is not loaded. Add it to `locale.languages` in {}.",
                    cli.config
                );
            };
            for path in tree.leaf_paths() {
                println!("{path}");
            }
        }
        Commands::Init => {
            let dir = cfg.locale.dir_path();
            let written = install_bundled_locales(&dir)?;
            if written.is_empty() {
                println!("Locale files already present in {}", dir.display());
            }
            for path in written {
                println!("Installed {}", path.display());
            }
        }
    }

    Ok(())
}

/// Catalog from the configured locale directory, or the bundled files.
async fn open_catalog(cfg: &config::Config, bundled: bool) -> anyhow::Result<Catalog> {
    if bundled {
        return Ok(Catalog::bundled()?);
    }
    Ok(load_catalog(&cfg.locale).await?)
}

/// Stderr-style fmt subscriber whose level filter can be swapped once the
/// config is known.
fn logging<W>(
    writer: W,
    filter: EnvFilter,
) -> (
    impl tracing::Subscriber + Send + Sync,
    reload::Handle<EnvFilter, Registry>,
)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(writer));
    (subscriber, handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn test_config_load_messages_are_logged() {
        let sink = Captured::default();
        let writer = sink.clone();
        let (subscriber, filter) = logging(move || writer.clone(), EnvFilter::new("info"));

        tracing::subscriber::with_default(subscriber, || {
            config::load("/nonexistent/__glossa_main_config__.toml").unwrap();
            filter.reload(EnvFilter::new("warn")).unwrap();
            tracing::info!("hidden once the config level applies");
        });

        let out = sink.text();
        assert!(out.contains("Config file not found"), "got: {out}");
        assert!(!out.contains("hidden once the config level applies"));
    }
}
