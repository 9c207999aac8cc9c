use clap::{Args, Subcommand};
use ng_core::{Article, Error, Result};
use crate::generator::{ArticleGenerator, GenerationRequest};

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Topic of the article
    #[arg(long)]
    pub topic: String,
    /// Comma separated keywords added to the search
    #[arg(long)]
    pub keywords: String,
    /// Approximate length of the article, shared between sources
    #[arg(long, default_value_t = 200)]
    pub word_count: usize,
    /// Author recorded on the article
    #[arg(long, default_value = "Anonymous")]
    pub author: String,
}

impl From<GenerateArgs> for GenerationRequest {
    fn from(args: GenerateArgs) -> Self {
        Self {
            topic: args.topic.trim().to_string(),
            keywords: args.keywords.trim().to_string(),
            word_count: args.word_count,
            author: args.author,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum GeneratorCommands {
    /// Generate an article from a web search and store it
    Generate(GenerateArgs),
    /// List stored articles, newest first
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Print a stored article
    Show {
        id: String,
    },
}

fn print_article(article: &Article) {
    println!("📰 {}", article.title);
    println!("   id:        {}", article.id);
    println!("   author:    {}", article.author);
    println!("   source:    {} / {}", article.source, article.category);
    println!("   sentiment: {} ({})", article.sentiment, article.sentiment_explanation);
    println!("   created:   {}", article.created_at.to_rfc3339());
    println!();
    println!("{}", article.content);
}

pub async fn handle_command(command: GeneratorCommands, generator: &ArticleGenerator) -> Result<()> {
    match command {
        GeneratorCommands::Generate(args) => {
            let article = generator.generate(&args.into()).await?;
            print_article(&article);
        }
        GeneratorCommands::List { category } => {
            let articles = generator.storage().list_articles(category.as_deref()).await?;
            println!("Found {} articles", articles.len());
            for article in articles {
                println!("{}  {}  [{}]  {}", article.id, article.created_at.format("%Y-%m-%d"), article.category, article.title);
            }
        }
        GeneratorCommands::Show { id } => {
            let article = generator
                .storage()
                .get_article(&id)
                .await?
                .ok_or_else(|| Error::NotFound(format!("Article {}", id)))?;
            print_article(&article);
        }
    }
    Ok(())
}
