//! Article Image Store - Administrative CLI
//!
//! Uploads, fetches, and deletes stored images from the command line
//! using the same configuration the embedding application loads.

use clap::Parser;
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use article_image_store::error::handlers::{error_to_http_status, handle_error};
use article_image_store::error::ImageStoreError;
use article_image_store::upload::UploadRequest;
use article_image_store::validation::media::MediaType;
use article_image_store::ImageStore;

/// Administrative interface to the article image store.
#[derive(Parser, Debug)]
#[command(name = "article-image-store", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Validate and store an image file.
    Upload {
        /// File to upload
        file: PathBuf,
        /// Declared MIME type; inferred from the extension when omitted
        #[arg(long)]
        mime: Option<String>,
    },
    /// Stream a stored image to a file or stdout.
    Fetch {
        /// Stored name segment (the identifier)
        name: String,
        /// Extension segment
        r#type: String,
        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Delete a stored image by its public path.
    Delete {
        /// Public path as returned by upload
        public_path: String,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        handle_error(&e);
        eprintln!("error ({}): {}", error_to_http_status(&e), e);
        process::exit(1);
    }
}

fn run() -> Result<(), ImageStoreError> {
    let cli = Cli::parse();
    let store = ImageStore::from_env()?;

    match cli.command {
        Commands::Upload { file, mime } => {
            let content = fs::read(&file)?;
            let original_filename = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let declared_mime = match mime {
                Some(m) => m,
                None => infer_mime(&original_filename),
            };

            let stored =
                store.upload(&UploadRequest::new(content, declared_mime, original_filename))?;
            info!("Stored as {}", stored.disk_path.display());
            println!("{}", stored.public_path);
        }
        Commands::Fetch {
            name,
            r#type,
            output,
        } => {
            let stream = store.retrieve(&name, &r#type)?;
            match output {
                Some(path) => {
                    let mut out = fs::File::create(path)?;
                    stream.copy_to(&mut out)?;
                }
                None => {
                    let stdout = io::stdout();
                    let mut out = stdout.lock();
                    stream.copy_to(&mut out)?;
                    out.flush()?;
                }
            }
        }
        Commands::Delete { public_path } => {
            store.delete(&public_path);
        }
    }

    Ok(())
}

/// Best-effort MIME from the file extension; validation has the final say.
fn infer_mime(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .and_then(|(_, ext)| MediaType::from_extension(ext))
        .map(|t| t.mime().to_string())
        .unwrap_or_default()
}
