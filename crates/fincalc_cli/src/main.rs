mod format;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use fincalc_content::files;
use fincalc_content::{LinkPipeline, MemoryArticles};
use fincalc_core::{ArticleStore, Error, Result};
use fincalc_formulas::{emi, gratuity, interest, sip, swp, tax};
use fincalc_linker::{AutoLinker, LinkMode, LinkTable};
use format::inr;

#[derive(Parser, Debug)]
#[command(author, version, about = "Personal finance calculators and content tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a financial calculator
    Calc {
        #[command(subcommand)]
        calculator: Calculator,
    },
    /// Rewrite keyword mentions in an article file into internal links
    Link {
        /// JSON file of articles
        #[arg(long)]
        articles: PathBuf,
        /// JSON file of {keyword, url} pairs
        #[arg(long)]
        links: PathBuf,
        /// Where to write the rewritten articles (defaults to in-place)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Link every occurrence instead of only the first
        #[arg(long)]
        all: bool,
    },
    /// Inspect an article file
    Articles {
        /// JSON file of articles
        #[arg(long)]
        file: PathBuf,
        /// Show a single article by slug
        #[arg(long)]
        slug: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum Calculator {
    /// Loan EMI and amortization schedule
    Emi {
        #[arg(long)]
        principal: f64,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        months: u32,
        /// Print the month-by-month amortization table
        #[arg(long)]
        schedule: bool,
    },
    /// SIP future value
    Sip {
        /// Monthly contribution
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        months: u32,
    },
    /// Fixed deposit maturity (quarterly compounding)
    Fd {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        months: u32,
    },
    /// Compound interest with a chosen compounding frequency
    Compound {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
        /// Compounding periods per year
        #[arg(long, default_value_t = 1)]
        frequency: u32,
    },
    /// Simple interest
    Simple {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: f64,
    },
    /// Slab-based income tax
    Tax {
        /// Gross annual income
        #[arg(long)]
        income: f64,
        /// Tax regime: new (default) or old
        #[arg(long, default_value = "new")]
        regime: String,
    },
    /// Gratuity under the 15/26 formula
    Gratuity {
        /// Last drawn monthly salary (basic + DA)
        #[arg(long)]
        salary: f64,
        #[arg(long)]
        years: f64,
    },
    /// Systematic withdrawal plan depletion
    Swp {
        #[arg(long)]
        corpus: f64,
        /// Monthly withdrawal
        #[arg(long)]
        withdrawal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        months: u32,
        /// Print the month-by-month balance table
        #[arg(long)]
        schedule: bool,
    },
}

fn run_calculator(calculator: Calculator) -> Result<()> {
    match calculator {
        Calculator::Emi { principal, rate, months, schedule } => {
            let b = emi::breakdown(principal, rate, months)?;
            println!("Monthly EMI:    {}", inr(b.monthly_installment));
            println!("Total payment:  {}", inr(b.total_payment));
            println!("Total interest: {}", inr(b.total_interest));
            if schedule {
                println!();
                println!("{:>5} {:>16} {:>16} {:>16}", "Month", "Interest", "Principal", "Balance");
                for row in emi::schedule(principal, rate, months)? {
                    println!(
                        "{:>5} {:>16} {:>16} {:>16}",
                        row.month,
                        inr(row.interest),
                        inr(row.principal),
                        inr(row.closing_balance)
                    );
                }
            }
        }
        Calculator::Sip { amount, rate, months } => {
            let b = sip::breakdown(amount, rate, months)?;
            println!("Invested:      {}", inr(b.invested));
            println!("Future value:  {}", inr(b.future_value));
            println!("Wealth gained: {}", inr(b.wealth_gained));
        }
        Calculator::Fd { principal, rate, months } => {
            let maturity = interest::fd_maturity(principal, rate, months)?;
            println!("Maturity amount: {}", inr(maturity));
            println!("Interest earned: {}", inr(maturity - principal));
        }
        Calculator::Compound { principal, rate, years, frequency } => {
            let amount = interest::compound(principal, rate, years, frequency)?;
            println!("Maturity amount: {}", inr(amount));
            println!("Interest earned: {}", inr(amount - principal));
        }
        Calculator::Simple { principal, rate, years } => {
            let amount = interest::simple(principal, rate, years)?;
            println!("Maturity amount: {}", inr(amount));
            println!("Interest earned: {}", inr(amount - principal));
        }
        Calculator::Tax { income, regime } => {
            let regime = match regime.as_str() {
                "new" => tax::Regime::new_regime_fy2024(),
                "old" => tax::Regime::old_regime(),
                other => {
                    return Err(Error::InvalidInput(format!(
                        "unknown regime {:?}, expected new or old",
                        other
                    )))
                }
            };
            let b = regime.compute(income)?;
            println!("Taxable income: {}", inr(b.taxable_income));
            for row in &b.slab_wise {
                let upper = match row.upto {
                    Some(limit) => inr(limit),
                    None => "above".to_string(),
                };
                println!(
                    "  {:>12} – {:>12} @ {:>4.1}%: {}",
                    inr(row.from),
                    upper,
                    row.rate_pct,
                    inr(row.tax)
                );
            }
            if b.rebate > 0.0 {
                println!("Rebate:         -{}", inr(b.rebate));
            }
            println!("Cess:           {}", inr(b.cess));
            println!("Total tax:      {}", inr(b.total));
            println!("Effective rate: {:.2}%", b.effective_rate_pct);
        }
        Calculator::Gratuity { salary, years } => {
            let g = gratuity::amount(salary, years)?;
            if !g.eligible {
                println!("Not eligible: fewer than 5 years of service");
            } else {
                println!("Gratuity: {}{}", inr(g.amount), if g.capped { " (statutory cap)" } else { "" });
            }
        }
        Calculator::Swp { corpus, withdrawal, rate, months, schedule } => {
            let result = swp::schedule(corpus, withdrawal, rate, months)?;
            println!("Total withdrawn: {}", inr(result.total_withdrawn));
            println!("Final balance:   {}", inr(result.final_balance));
            match result.exhausted_at {
                Some(month) => println!("⚠️ Corpus exhausted in month {} of {}", month, months),
                None => println!("Corpus lasts the full {} months", months),
            }
            if schedule {
                println!();
                println!(
                    "{:>5} {:>16} {:>14} {:>14} {:>16}",
                    "Month", "Opening", "Interest", "Withdrawal", "Closing"
                );
                for row in &result.periods {
                    println!(
                        "{:>5} {:>16} {:>14} {:>14} {:>16}",
                        row.month,
                        inr(row.opening),
                        inr(row.interest),
                        inr(row.withdrawal),
                        inr(row.closing)
                    );
                }
            }
        }
    }
    Ok(())
}

async fn run_link(
    articles_path: PathBuf,
    links_path: PathBuf,
    output: Option<PathBuf>,
    all: bool,
) -> Result<()> {
    let articles = files::load_articles(&articles_path)?;
    let links = files::load_links(&links_path)?;
    info!("📄 Loaded {} articles and {} link entries", articles.len(), links.len());

    let mode = if all { LinkMode::AllMatches } else { LinkMode::FirstMatch };
    let linker = AutoLinker::new(LinkTable::new(links)?).with_mode(mode);
    let store = MemoryArticles::with_articles(articles).await;

    let reports = LinkPipeline::new(linker).run(&store).await?;
    let total: usize = reports.iter().map(|r| r.links_added).sum();
    for report in &reports {
        println!("{}: {} links", report.slug, report.links_added);
    }
    println!("Inserted {} links across {} articles", total, reports.len());

    let rewritten = store.list_articles().await?;
    let destination = output.unwrap_or(articles_path);
    files::save_articles(&destination, &rewritten)?;
    info!("💾 Wrote {} articles to {}", rewritten.len(), destination.display());
    Ok(())
}

fn run_articles(file: PathBuf, slug: Option<String>) -> Result<()> {
    let articles = files::load_articles(&file)?;
    match slug {
        Some(slug) => {
            let article = articles
                .iter()
                .find(|a| a.slug == slug)
                .ok_or_else(|| Error::Storage(format!("no article with slug {:?}", slug)))?;
            println!("{}", serde_json::to_string_pretty(article)?);
        }
        None => {
            for article in &articles {
                println!(
                    "{}  {}  [{}]",
                    article.published_at.format("%Y-%m-%d"),
                    article.slug,
                    article.category.as_deref().unwrap_or("-")
                );
            }
            println!("{} articles", articles.len());
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Calc { calculator } => run_calculator(calculator)?,
        Commands::Link { articles, links, output, all } => {
            run_link(articles, links, output, all).await?
        }
        Commands::Articles { file, slug } => run_articles(file, slug)?,
    }
    Ok(())
}
