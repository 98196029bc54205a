use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cms_client::{CmsClient, CmsError, PostDocument, PostPage, QueryOptions};

const DEFAULT_API_URL: &str = "http://127.0.0.1:4000/api/v2";

#[derive(Debug, Parser)]
#[command(name = "site-cli", version, about = "Inspect the content API behind the blog")]
struct Cli {
    /// Content API base URL (falls back to $CMS_API_URL).
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Content snapshot ref, for reading draft content.
    #[arg(long, global = true)]
    preview_ref: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// First page of the post listing.
    List {
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },
    /// Full post document by uid.
    Get {
        #[arg(long)]
        uid: String,
    },
    /// Follow a pagination cursor URL.
    Next {
        #[arg(long)]
        cursor: String,
    },
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let api_url = resolve_api_url(cli.api_url, std::env::var("CMS_API_URL").ok());
    let client = CmsClient::new(api_url);
    let preview_ref = cli.preview_ref.as_deref();

    match cli.command {
        Command::List { page_size } => {
            let opts =
                QueryOptions::published(page_size).with_ref(preview_ref.map(str::to_string));
            let page = client.query_posts(&opts).await.map_err(map_client_error)?;
            print_page(&page);
        }
        Command::Get { uid } => {
            let document = client
                .get_by_uid(&uid, preview_ref)
                .await
                .map_err(map_client_error)?;
            print_document(&document);
        }
        Command::Next { cursor } => {
            let page = client.fetch_page(&cursor).await.map_err(map_client_error)?;
            print_page(&page);
        }
    }

    Ok(())
}

fn resolve_api_url(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env)
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn map_client_error(err: CmsError) -> anyhow::Error {
    let message = match err {
        CmsError::NotFound => "document not found".to_string(),
        CmsError::InvalidRequest(message) => format!("invalid request: {message}"),
        CmsError::UnexpectedResponse(message) => format!("unexpected response: {message}"),
        CmsError::Http(err) => format!("http error: {err}"),
    };
    anyhow::anyhow!(message)
}

fn print_page(page: &PostPage) {
    println!("Posts: {}", page.results.len());
    for post in &page.results {
        println!(
            "- [{}] {} — {} ({})",
            post.uid,
            post.title,
            post.author,
            post.published_at.format("%Y-%m-%d")
        );
    }
    match &page.next_page {
        Some(cursor) => println!("next page: {cursor}"),
        None => println!("no further pages"),
    }
}

fn print_document(document: &PostDocument) {
    println!("uid: {}", document.uid);
    println!("title: {}", document.title);
    println!("subtitle: {}", document.subtitle);
    println!("author: {}", document.author);
    println!("published: {}", document.published_at.to_rfc3339());
    println!("edited: {}", document.edited_at.to_rfc3339());
    if let Some(banner) = &document.banner_url {
        println!("banner: {banner}");
    }
    println!("sections:");
    for group in &document.content {
        println!("  - {} ({} fragments)", group.heading, group.body.len());
    }
}
