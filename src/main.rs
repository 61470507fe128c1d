mod calc;
mod cheque;
mod config;
mod error;

use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tabled::{settings::Style, Table, Tabled};

use crate::calc::{
    allocate_receipt, calculate, calculate_all, normalize_date, BillStatus, CalculatedBill,
};
use crate::cheque::extract_cheque_fields;
use crate::config::{
    config_dir, load_bills, load_config, save_bills, Bill, BillStore, YesNo, CONFIG_TEMPLATE,
};
use crate::error::{BillbookError, Result};

#[derive(Parser)]
#[command(name = "billbook")]
#[command(version, about = "Minimal CLI trade bill book with overdue interest tracking", long_about = None)]
struct Cli {
    /// Path to config directory (default: ~/.billbook or XDG config)
    #[arg(short = 'C', long, global = true)]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize config directory with a template config file
    Init,

    /// Record a new bill
    Add {
        /// Bill number as written on the bill
        #[arg(short, long)]
        bill_no: String,

        /// Party the bill is drawn on
        #[arg(short, long)]
        party: String,

        /// Party's company name
        #[arg(long)]
        company: Option<String>,

        /// Net amount owed
        #[arg(short, long)]
        amount: f64,

        /// Interest-free credit period in days (default from config)
        #[arg(long)]
        credit_days: Option<i64>,

        /// Bill date (DD/MM/YYYY or YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// Annual interest rate in percent (default from config)
        #[arg(long)]
        rate: Option<f64>,

        /// Party's mobile number
        #[arg(long)]
        mobile: Option<String>,
    },

    /// List bills with aging and interest figures
    List {
        /// Number of bills to show (default: all)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Filter by status (pending, overdue, interest-pending, settled)
        #[arg(long)]
        status: Option<String>,

        /// Filter by party name (substring match)
        #[arg(long)]
        party: Option<String>,
    },

    /// Show one bill with its full interest breakdown
    Show {
        /// Bill id, bill number, or index from 'list' (e.g., 1 or BILL-2026-0001)
        bill: String,
    },

    /// Record a receipt against a bill
    Receipt {
        /// Bill id, bill number, or index from 'list'
        bill: String,

        /// Amount received
        #[arg(short, long)]
        amount: f64,

        /// Receipt date (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Mark the accrued interest as settled along with the receipt
        #[arg(long)]
        interest_paid: bool,
    },

    /// Remove a recorded receipt from a bill
    ClearReceipt {
        /// Bill id, bill number, or index from 'list'
        bill: String,
    },

    /// Mark a bill's accrued interest as paid
    MarkInterestPaid {
        /// Bill id, bill number, or index from 'list'
        bill: String,
    },

    /// Mark a bill's accrued interest as pending again
    MarkInterestPending {
        /// Bill id, bill number, or index from 'list'
        bill: String,
    },

    /// Split one payment across several bills, proportional to principal
    Allocate {
        /// Total amount received
        #[arg(short, long)]
        amount: f64,

        /// Receipt date (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Bills to allocate across (ids, bill numbers, or list indices)
        #[arg(required = true)]
        bills: Vec<String>,
    },

    /// Extract receipt fields from a cheque image via the scan service
    ScanCheque {
        /// Path to the cheque image
        image: PathBuf,

        /// Apply the extracted candidates to this bill's receipt fields
        #[arg(long)]
        bill: Option<String>,
    },

    /// Show aggregate totals and status counts
    Summary,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Determine config directory
    let cfg_dir = match cli.config_dir {
        Some(p) => p,
        None => config_dir()?,
    };

    match cli.command {
        Commands::Init => cmd_init(&cfg_dir),
        Commands::Add {
            bill_no,
            party,
            company,
            amount,
            credit_days,
            date,
            rate,
            mobile,
        } => cmd_add(
            &cfg_dir,
            bill_no,
            party,
            company,
            amount,
            credit_days,
            date,
            rate,
            mobile,
        ),
        Commands::List {
            limit,
            status,
            party,
        } => cmd_list(&cfg_dir, limit, status, party),
        Commands::Show { bill } => cmd_show(&cfg_dir, &bill),
        Commands::Receipt {
            bill,
            amount,
            date,
            interest_paid,
        } => cmd_receipt(&cfg_dir, &bill, amount, date, interest_paid),
        Commands::ClearReceipt { bill } => cmd_clear_receipt(&cfg_dir, &bill),
        Commands::MarkInterestPaid { bill } => cmd_mark_interest(&cfg_dir, &bill, YesNo::Yes),
        Commands::MarkInterestPending { bill } => cmd_mark_interest(&cfg_dir, &bill, YesNo::No),
        Commands::Allocate {
            amount,
            date,
            bills,
        } => cmd_allocate(&cfg_dir, amount, date, &bills),
        Commands::ScanCheque { image, bill } => cmd_scan_cheque(&cfg_dir, &image, bill.as_deref()),
        Commands::Summary => cmd_summary(&cfg_dir),
    }
}

/// Initialize config directory with a template config file
fn cmd_init(cfg_dir: &PathBuf) -> Result<()> {
    use std::fs;

    if cfg_dir.exists() {
        return Err(BillbookError::AlreadyInitialized(cfg_dir.clone()));
    }

    fs::create_dir_all(cfg_dir)?;
    fs::write(cfg_dir.join("config.toml"), CONFIG_TEMPLATE)?;

    println!("Initialized bill book at: {}", cfg_dir.display());
    println!();
    println!("Next steps:");
    println!(
        "  1. Edit your firm details and interest policy:  $EDITOR {}/config.toml",
        cfg_dir.display()
    );
    println!("  2. Record your first bill:");
    println!("     billbook add --bill-no 101 --party \"Sharma Traders\" --amount 15000");

    Ok(())
}

// Table row structs for tabled
#[derive(Tabled)]
struct BillRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "BILL NO")]
    bill_no: String,
    #[tabled(rename = "PARTY")]
    party: String,
    #[tabled(rename = "DATE")]
    date: String,
    #[tabled(rename = "AMOUNT")]
    amount: String,
    #[tabled(rename = "DAYS")]
    days: i64,
    #[tabled(rename = "INT.DAYS")]
    interest_days: i64,
    #[tabled(rename = "INTEREST")]
    interest: String,
    #[tabled(rename = "STATUS")]
    status: String,
}

fn format_whole_money(value: f64, currency_symbol: &str) -> String {
    let rounded = value.round() as i64;
    let grouped = format_grouped_int(rounded);
    format!("{}{:>6}", currency_symbol, grouped)
}

fn format_grouped_int(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let mut grouped: String = out.chars().rev().collect();
    if negative {
        grouped.insert(0, '-');
    }
    grouped
}

/// Format a money amount with two decimal places and thousands separators
fn format_money(value: f64, currency_symbol: &str) -> String {
    let rounded = format!("{:.2}", value);
    let parts: Vec<&str> = rounded.split('.').collect();
    let whole: i64 = parts[0].parse().unwrap_or(0);
    format!(
        "{}{}.{}",
        currency_symbol,
        format_grouped_int(whole),
        parts[1]
    )
}

fn add_financial_footer(table: &str, principal: &str, received: &str, outstanding: &str) -> String {
    let lines: Vec<&str> = table.lines().collect();
    if lines.len() < 4 {
        return table.to_string();
    }

    // Parse the top border to discover column widths
    let top = lines[0];
    let Some(inner) = top.strip_prefix('╭').and_then(|s| s.strip_suffix('╮')) else {
        return table.to_string();
    };

    let widths: Vec<usize> = inner.split('┬').map(|p| p.chars().count()).collect();
    if widths.len() < 9 {
        return table.to_string();
    }

    // Merge columns #, BILL NO, PARTY, DATE into one label cell; keep the
    // AMOUNT column; drop DAYS, INT.DAYS, INTEREST, and STATUS
    let left_width = widths[0] + widths[1] + widths[2] + widths[3] + 3; // +3 for the three ┴ replaced by spaces
    let amount_width = widths[4];

    let rows = [
        ("PRINCIPAL", principal),
        ("(-) RECEIVED", received),
        ("(=) OUTSTANDING", outstanding),
    ];

    // Strip the original bottom border and start building
    let mut out = lines[..lines.len() - 1].join("\n");
    out.push('\n');

    // First separator: merge left 4 columns, keep AMOUNT, close off the rest
    out.push_str(&format!(
        "├{}┴{}┴{}┴{}┼{}┼{}┴{}┴{}┴{}╯\n",
        "─".repeat(widths[0]),
        "─".repeat(widths[1]),
        "─".repeat(widths[2]),
        "─".repeat(widths[3]),
        "─".repeat(amount_width),
        "─".repeat(widths[5]),
        "─".repeat(widths[6]),
        "─".repeat(widths[7]),
        "─".repeat(widths[8]),
    ));

    // Summary rows with separators between them
    for (idx, (label, value)) in rows.iter().enumerate() {
        out.push_str(&format!(
            "│ {:>left$} │ {:>amount$} │\n",
            label,
            value,
            left = left_width - 2,
            amount = amount_width - 2
        ));
        if idx < rows.len() - 1 {
            out.push_str(&format!(
                "├{}┼{}┤\n",
                "─".repeat(left_width),
                "─".repeat(amount_width)
            ));
        }
    }

    // Bottom border
    out.push_str(&format!(
        "╰{}┴{}╯",
        "─".repeat(left_width),
        "─".repeat(amount_width)
    ));

    out
}

/// Resolve a bill reference to its position in the store.
/// Accepts either an index (1-based, newest first) from 'list', the bill id,
/// or the bill number.
fn resolve_bill_index(store: &BillStore, reference: &str) -> Result<usize> {
    let lookup = |r: &str| {
        store
            .bills
            .iter()
            .position(|b| b.id == r || b.bill_no == r)
    };

    if let Ok(idx) = reference.parse::<usize>() {
        if idx >= 1 && idx <= store.bills.len() {
            return Ok(store.bills.len() - idx);
        }
        // Out of range as an index, but numeric bill numbers are common
        if let Some(pos) = lookup(reference) {
            return Ok(pos);
        }
        return Err(BillbookError::InvalidBillIndex(reference.to_string()));
    }

    lookup(reference).ok_or_else(|| BillbookError::BillNotFound(reference.to_string()))
}

/// Validate an entered date, or default to today in the primary encoding.
/// The raw text is what gets stored; normalization happens on every read.
fn parse_entry_date(input: Option<&str>, today: NaiveDate) -> Result<String> {
    match input {
        Some(s) => {
            if normalize_date(s).is_some() {
                Ok(s.to_string())
            } else {
                Err(BillbookError::InvalidDate(s.to_string()))
            }
        }
        None => Ok(today.format("%d/%m/%Y").to_string()),
    }
}

/// Format bill id from template
fn format_bill_id(format: &str, year: u32, seq: u32) -> String {
    format
        .replace("{year}", &year.to_string())
        .replace("{seq:04}", &format!("{:04}", seq))
        .replace("{seq:05}", &format!("{:05}", seq))
        .replace("{seq:03}", &format!("{:03}", seq))
}

/// Record a new bill
fn cmd_add(
    cfg_dir: &PathBuf,
    bill_no: String,
    party: String,
    company: Option<String>,
    amount: f64,
    credit_days: Option<i64>,
    date: Option<String>,
    rate: Option<f64>,
    mobile: Option<String>,
) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(BillbookError::ConfigNotFound(cfg_dir.clone()));
    }

    if amount <= 0.0 {
        return Err(BillbookError::InvalidAmount);
    }

    let config = load_config(cfg_dir)?;
    let mut store = load_bills(cfg_dir)?;

    let today = Local::now().date_naive();
    let bill_date = parse_entry_date(date.as_deref(), today)?;

    let current_year = today.year() as u32;
    let seq = if store.counter.last_year == current_year {
        store.counter.last_number + 1
    } else {
        1 // Reset for new year
    };
    let id = format_bill_id(&config.billing.id_format, current_year, seq);

    let credit_days = credit_days.unwrap_or(config.billing.default_credit_days);
    let rate = rate.unwrap_or(config.billing.default_interest_rate);

    store.counter.last_number = seq;
    store.counter.last_year = current_year;
    store.bills.push(Bill {
        id: id.clone(),
        bill_no,
        party: party.clone(),
        company_name: company.unwrap_or_default(),
        bill_date: bill_date.clone(),
        net_amount: amount,
        credit_days,
        rec_date: None,
        rec_amount: 0.0,
        interest_paid: YesNo::No,
        interest_rate: rate,
        mobile,
        cheque_number: None,
        bank_name: None,
    });

    save_bills(cfg_dir, &store)?;

    println!("Recorded {}", id);
    println!("  Party:       {}", party);
    println!(
        "  Amount:      {}{:.2}",
        config.billing.currency_symbol, amount
    );
    println!("  Date:        {}", bill_date);
    println!("  Credit days: {}", credit_days);
    println!("  Rate:        {:.2}% p.a.", rate);

    Ok(())
}

/// List bills with aging and interest figures
fn cmd_list(
    cfg_dir: &PathBuf,
    limit: Option<usize>,
    status: Option<String>,
    party: Option<String>,
) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(BillbookError::ConfigNotFound(cfg_dir.clone()));
    }

    let config = load_config(cfg_dir)?;
    let store = load_bills(cfg_dir)?;

    if store.bills.is_empty() {
        println!("No bills recorded yet.");
        return Ok(());
    }

    let status_filter = status
        .as_deref()
        .map(|s| {
            s.parse::<BillStatus>()
                .map_err(|_| BillbookError::InvalidStatusFilter(s.to_string()))
        })
        .transpose()?;

    let today = Local::now().date_naive();
    let calculated = calculate_all(&store.bills, config.interest_policy(), today);

    // Newest first, 1-indexed; indices stay stable under filters so they
    // keep working with show/receipt/allocate
    let mut shown: Vec<(usize, &CalculatedBill)> = calculated
        .iter()
        .rev()
        .enumerate()
        .map(|(i, c)| (i + 1, c))
        .collect();

    if let Some(want) = status_filter {
        shown.retain(|(_, c)| c.status == want);
    }
    if let Some(ref p) = party {
        let needle = p.to_lowercase();
        shown.retain(|(_, c)| c.bill.party.to_lowercase().contains(&needle));
    }
    if let Some(n) = limit {
        shown.truncate(n);
    }

    if shown.is_empty() {
        println!("No bills match the given filters.");
        return Ok(());
    }

    let sym = &config.billing.currency_symbol;
    let rows: Vec<BillRow> = shown
        .iter()
        .map(|(idx, c)| BillRow {
            index: *idx,
            bill_no: c.bill.bill_no.clone(),
            party: c.bill.party.clone(),
            date: if c.bill.bill_date.trim().is_empty() {
                "-".to_string()
            } else {
                c.bill.bill_date.clone()
            },
            amount: format_whole_money(c.bill.net_amount, sym),
            days: c.total_days,
            interest_days: c.interest_days,
            interest: format_money(c.interest_amount, sym),
            status: c.status.to_string(),
        })
        .collect();

    // Financial summary over the shown bills
    let principal: f64 = shown.iter().map(|(_, c)| c.bill.net_amount).sum();
    let received: f64 = shown.iter().map(|(_, c)| c.bill.rec_amount).sum();
    let outstanding = principal - received;
    let interest: f64 = shown.iter().map(|(_, c)| c.interest_amount).sum();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    let principal_amount = format_whole_money(principal, sym);
    let received_amount = format_whole_money(received, sym);
    let outstanding_amount = format_whole_money(outstanding, sym);
    let table = add_financial_footer(
        &table,
        &principal_amount,
        &received_amount,
        &outstanding_amount,
    );

    println!("{table}");

    println!();
    println!("Total: {} bills", store.bills.len());
    println!("Accrued interest (shown): {}", format_money(interest, sym));
    println!("Use index number with show/receipt/allocate (e.g., 'billbook show 1')");

    Ok(())
}

/// Show one bill with its full interest breakdown
fn cmd_show(cfg_dir: &PathBuf, reference: &str) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(BillbookError::ConfigNotFound(cfg_dir.clone()));
    }

    let config = load_config(cfg_dir)?;
    let store = load_bills(cfg_dir)?;

    let idx = resolve_bill_index(&store, reference)?;
    let today = Local::now().date_naive();
    let calc = calculate(&store.bills[idx], config.interest_policy(), today);

    let b = &calc.bill;
    let sym = &config.billing.currency_symbol;

    println!("{} ({})", b.id, calc.status);
    println!("{}", "-".repeat(50));
    println!("Bill no:       {}", b.bill_no);
    println!("Party:         {}", b.party);
    if !b.company_name.is_empty() {
        println!("Company:       {}", b.company_name);
    }
    if let Some(ref mobile) = b.mobile {
        println!("Mobile:        {}", mobile);
    }
    println!(
        "Bill date:     {}",
        if b.bill_date.trim().is_empty() {
            "-"
        } else {
            b.bill_date.as_str()
        }
    );
    println!("Amount:        {}{:.2}", sym, b.net_amount);
    println!("Credit days:   {}", b.credit_days);
    println!("Rate:          {:.2}% p.a.", b.interest_rate);
    println!();
    println!("Days elapsed:  {}", calc.total_days);
    println!("Interest days: {}", calc.interest_days);
    println!("Interest:      {}", format_money(calc.interest_amount, sym));

    println!();
    match b.rec_date {
        Some(ref d) => {
            println!("Receipt:       {}{:.2} on {}", sym, b.rec_amount, d);
            println!("Outstanding:   {}{:.2}", sym, b.outstanding());
            if let Some(ref cheque) = b.cheque_number {
                match b.bank_name {
                    Some(ref bank) => println!("Cheque:        {} ({})", cheque, bank),
                    None => println!("Cheque:        {}", cheque),
                }
            }
            println!("Interest paid: {}", b.interest_paid);
        }
        None => println!("No receipt recorded."),
    }

    Ok(())
}

/// Record a receipt against a bill
fn cmd_receipt(
    cfg_dir: &PathBuf,
    reference: &str,
    amount: f64,
    date: Option<String>,
    interest_paid: bool,
) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(BillbookError::ConfigNotFound(cfg_dir.clone()));
    }

    if amount <= 0.0 {
        return Err(BillbookError::InvalidAmount);
    }

    let config = load_config(cfg_dir)?;
    let mut store = load_bills(cfg_dir)?;
    let idx = resolve_bill_index(&store, reference)?;

    let today = Local::now().date_naive();
    let rec_date = parse_entry_date(date.as_deref(), today)?;

    {
        let bill = &mut store.bills[idx];
        bill.rec_date = Some(rec_date);
        bill.rec_amount = amount;
        if interest_paid {
            bill.interest_paid = YesNo::Yes;
        }
    }

    save_bills(cfg_dir, &store)?;

    let calc = calculate(&store.bills[idx], config.interest_policy(), today);
    let sym = &config.billing.currency_symbol;

    println!(
        "Recorded {}{:.2} receipt for {} (status: {})",
        sym, amount, store.bills[idx].id, calc.status
    );
    if calc.interest_amount > 0.0 && !store.bills[idx].interest_paid.is_yes() {
        println!(
            "  Interest due: {} ({} days past credit)",
            format_money(calc.interest_amount, sym),
            calc.interest_days
        );
    }

    Ok(())
}

/// Remove a recorded receipt from a bill
fn cmd_clear_receipt(cfg_dir: &PathBuf, reference: &str) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(BillbookError::ConfigNotFound(cfg_dir.clone()));
    }

    let mut store = load_bills(cfg_dir)?;
    let idx = resolve_bill_index(&store, reference)?;

    if store.bills[idx].rec_date.is_none() {
        return Err(BillbookError::NoReceipt(store.bills[idx].id.clone()));
    }

    {
        let bill = &mut store.bills[idx];
        bill.rec_date = None;
        bill.rec_amount = 0.0;
        bill.interest_paid = YesNo::No;
    }

    let id = store.bills[idx].id.clone();
    save_bills(cfg_dir, &store)?;

    println!("Cleared receipt from {}", id);

    Ok(())
}

/// Flip a bill's interest-paid flag
fn cmd_mark_interest(cfg_dir: &PathBuf, reference: &str, flag: YesNo) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(BillbookError::ConfigNotFound(cfg_dir.clone()));
    }

    let config = load_config(cfg_dir)?;
    let mut store = load_bills(cfg_dir)?;
    let idx = resolve_bill_index(&store, reference)?;

    store.bills[idx].interest_paid = flag;
    save_bills(cfg_dir, &store)?;

    let today = Local::now().date_naive();
    let calc = calculate(&store.bills[idx], config.interest_policy(), today);

    println!(
        "Marked {} interest as {} (status: {})",
        store.bills[idx].id,
        if flag.is_yes() { "paid" } else { "pending" },
        calc.status
    );

    Ok(())
}

/// Split one payment across several bills, proportional to principal
fn cmd_allocate(
    cfg_dir: &PathBuf,
    amount: f64,
    date: Option<String>,
    references: &[String],
) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(BillbookError::ConfigNotFound(cfg_dir.clone()));
    }

    if amount <= 0.0 {
        return Err(BillbookError::InvalidAmount);
    }
    if references.is_empty() {
        return Err(BillbookError::NoAllocationTargets);
    }

    let config = load_config(cfg_dir)?;
    let mut store = load_bills(cfg_dir)?;

    let mut indices = Vec::with_capacity(references.len());
    for reference in references {
        indices.push(resolve_bill_index(&store, reference)?);
    }

    let today = Local::now().date_naive();
    let rec_date = parse_entry_date(date.as_deref(), today)?;

    let amounts: Vec<f64> = indices.iter().map(|&i| store.bills[i].net_amount).collect();
    let shares = allocate_receipt(&amounts, amount);

    for (&i, &share) in indices.iter().zip(shares.iter()) {
        let bill = &mut store.bills[i];
        bill.rec_date = Some(rec_date.clone());
        bill.rec_amount = share;
    }

    save_bills(cfg_dir, &store)?;

    let sym = &config.billing.currency_symbol;
    println!(
        "Allocated {}{:.2} across {} bills:",
        sym,
        amount,
        indices.len()
    );
    for (&i, &share) in indices.iter().zip(shares.iter()) {
        println!("  {}  {}", store.bills[i].id, format_money(share, sym));
    }

    Ok(())
}

/// Extract receipt fields from a cheque image via the scan service
fn cmd_scan_cheque(cfg_dir: &PathBuf, image: &PathBuf, bill: Option<&str>) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(BillbookError::ConfigNotFound(cfg_dir.clone()));
    }

    let config = load_config(cfg_dir)?;
    let bytes = std::fs::read(image)?;
    let fields = extract_cheque_fields(&config.scan, &bytes)?;

    let sym = &config.billing.currency_symbol;
    println!("Extracted cheque fields:");
    println!("  Party:      {}", fields.party.as_deref().unwrap_or("-"));
    println!("  Bank:       {}", fields.bank_name.as_deref().unwrap_or("-"));
    println!(
        "  Cheque no:  {}",
        fields.cheque_number.as_deref().unwrap_or("-")
    );
    match fields.amount {
        Some(a) => println!("  Amount:     {}{:.2}", sym, a),
        None => println!("  Amount:     -"),
    }
    println!("  Date:       {}", fields.date.as_deref().unwrap_or("-"));

    if let Some(reference) = bill {
        let mut store = load_bills(cfg_dir)?;
        let idx = resolve_bill_index(&store, reference)?;

        {
            let b = &mut store.bills[idx];
            if fields.cheque_number.is_some() {
                b.cheque_number = fields.cheque_number.clone();
            }
            if fields.bank_name.is_some() {
                b.bank_name = fields.bank_name.clone();
            }
            if let Some(a) = fields.amount {
                b.rec_amount = a;
            }
            if let Some(ref d) = fields.date {
                b.rec_date = Some(d.clone());
            }
        }

        let id = store.bills[idx].id.clone();
        save_bills(cfg_dir, &store)?;

        println!();
        println!("Applied candidates to {}. Review with 'billbook show {}'.", id, reference);
    }

    Ok(())
}

/// Show aggregate totals and status counts
fn cmd_summary(cfg_dir: &PathBuf) -> Result<()> {
    if !cfg_dir.exists() {
        return Err(BillbookError::ConfigNotFound(cfg_dir.clone()));
    }

    let config = load_config(cfg_dir)?;
    let store = load_bills(cfg_dir)?;

    if store.bills.is_empty() {
        println!("No bills recorded yet.");
        return Ok(());
    }

    let today = Local::now().date_naive();
    let calculated = calculate_all(&store.bills, config.interest_policy(), today);

    let count_of = |want: BillStatus| calculated.iter().filter(|c| c.status == want).count();

    let principal: f64 = calculated.iter().map(|c| c.bill.net_amount).sum();
    let received: f64 = calculated.iter().map(|c| c.bill.rec_amount).sum();
    let outstanding = principal - received;
    let interest_accrued: f64 = calculated.iter().map(|c| c.interest_amount).sum();
    let interest_pending: f64 = calculated
        .iter()
        .filter(|c| !c.bill.interest_paid.is_yes())
        .map(|c| c.interest_amount)
        .sum();

    let sym = &config.billing.currency_symbol;

    println!("Bill Book Summary");
    println!("{}", "-".repeat(50));
    println!("Company:           {}", config.company.name);
    println!("Bills:             {}", store.bills.len());
    println!("  Pending:         {}", count_of(BillStatus::Pending));
    println!("  Overdue:         {}", count_of(BillStatus::Overdue));
    println!("  Int. pending:    {}", count_of(BillStatus::InterestPending));
    println!("  Settled:         {}", count_of(BillStatus::Settled));
    println!("Principal:         {}", format_money(principal, sym));
    println!("Received:          {}", format_money(received, sym));
    println!("Outstanding:       {}", format_money(outstanding, sym));
    println!("Interest accrued:  {}", format_money(interest_accrued, sym));
    println!("Interest pending:  {}", format_money(interest_pending, sym));

    Ok(())
}
