use std::path::{Path, PathBuf};

use colored::Colorize;
use folio::{
    api,
    board::{self, BoardState, DividendRecord, SortDirection, SortField},
    error::FolioResult,
    utils::datetime::{display_date, display_datetime},
};
use indicatif::{ProgressBar, ProgressStyle};
use tabled::settings::{
    Alignment, Color, Width,
    measurement::Percent,
    object::{Columns, Object, Rows},
    peaker::Priority,
};
use tokio::time::Duration;

#[derive(clap::Args)]
pub struct DividendsCommand {
    #[arg(
        short = 's',
        long = "search",
        help = "Filter by company name or stock symbol, e.g. -s bdo"
    )]
    search: Option<String>,

    #[arg(
        long = "sort",
        default_value = "ex_dividend_date",
        value_parser = board::sort_field_from_str,
        help = "Sort field: company_name, stock_symbol, dividend_per_share, ex_dividend_date or payment_date"
    )]
    sort: SortField,

    #[arg(
        short = 'a',
        long = "ascending",
        help = "Sort ascending, the default order is descending"
    )]
    ascending: bool,

    #[arg(
        short = 'e',
        long = "export",
        help = "Export the selected records to a CSV file, e.g. -e dividends.csv"
    )]
    export: Option<PathBuf>,
}

impl DividendsCommand {
    pub async fn exec(&self) {
        let spinner = ProgressBar::new_spinner();
        spinner
            .set_style(ProgressStyle::with_template("{msg}[{elapsed}] {spinner:.cyan}").unwrap());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner.set_message("Fetching dividend data ");

        match api::fetch_dividends().await {
            Ok(feed) => {
                spinner.finish();

                let board = BoardState {
                    query: self.search.clone().unwrap_or_default(),
                    sort_field: self.sort,
                    sort_direction: if self.ascending {
                        SortDirection::Ascending
                    } else {
                        SortDirection::Descending
                    },
                };
                let view = board.select(&feed.data);

                let mut table_data: Vec<Vec<String>> = vec![vec![
                    "Company".to_string(),
                    "Symbol".to_string(),
                    "DPS".to_string(),
                    "Ex-Date".to_string(),
                    "Record".to_string(),
                    "Payment".to_string(),
                    "Type".to_string(),
                    "Circular".to_string(),
                ]];
                for record in &view {
                    table_data.push(vec![
                        record.company_name.clone(),
                        record.stock_symbol.clone(),
                        board::format_peso(record.dividend_per_share),
                        display_date(&record.ex_dividend_date),
                        display_date(&record.record_date),
                        display_date(&record.payment_date),
                        record.dividend_type.clone(),
                        record.circular_number.clone(),
                    ]);
                }

                let mut table = tabled::builder::Builder::from_iter(&table_data).build();
                table.modify(Rows::first(), Color::FG_BRIGHT_BLACK);
                table.modify(Columns::new(1..2).not(Rows::first()), Color::FG_CYAN);
                table.modify(Columns::new(2..3).not(Rows::first()), Color::FG_GREEN);
                table.modify(Columns::new(2..3), Alignment::right());
                table.with(Width::wrap(Percent(100)).priority(Priority::max(true)));
                println!("\n{table}");

                println!(
                    "{}",
                    format!("Showing {} of {} declarations", view.len(), feed.count)
                        .bright_black()
                );

                let sum = board::dps_sum(&feed.data);
                if let Some(top) = board::top_dividend(&feed.data) {
                    println!(
                        "{}",
                        format!(
                            "Combined DPS {} · Top {} ({})",
                            board::format_peso(sum),
                            board::format_peso(top.dividend_per_share),
                            top.stock_symbol
                        )
                        .bright_black()
                    );
                }

                if !feed.last_updated.is_empty() {
                    println!(
                        "{}",
                        format!("Updated: {}", display_datetime(&feed.last_updated))
                            .bright_black()
                    );
                }

                if let Some(path) = &self.export {
                    match export_csv(path, &view) {
                        Ok(_) => {
                            println!(
                                "[+] {} records exported to '{}'",
                                view.len(),
                                path.to_string_lossy().cyan()
                            );
                        }
                        Err(err) => {
                            println!("[!] {}", err.to_string().red());
                        }
                    }
                }
            }
            Err(err) => {
                spinner.finish_with_message(format!("{} ", err.to_string().red()));
            }
        }
    }
}

fn export_csv(path: &Path, records: &[&DividendRecord]) -> FolioResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
