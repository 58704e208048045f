use tabled::{settings::Style, Table, Tabled};

use crate::parcel::StockRow;
use crate::storage::StockStats;

#[derive(Tabled)]
struct StockTableRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Qty")]
    quantity: i64,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Exit")]
    exit_method: String,
    #[tabled(rename = "Entry Date")]
    entry_date: String,
    #[tabled(rename = "Entry Time")]
    entry_time: String,
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

impl From<&StockRow> for StockTableRow {
    fn from(row: &StockRow) -> Self {
        Self {
            code: row.code.clone(),
            description: row.description.clone(),
            quantity: row.quantity,
            status: row.status.clone(),
            exit_method: or_dash(&row.exit_method),
            entry_date: or_dash(&row.entry_date),
            entry_time: or_dash(&row.entry_time),
        }
    }
}

/// Render the stock listing. Empty when there are no rows.
pub fn stock_table(rows: &[StockRow]) -> String {
    if rows.is_empty() {
        return String::new();
    }

    let rows: Vec<StockTableRow> = rows.iter().map(StockTableRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

pub fn stats_table(stats: &StockStats) -> String {
    let rows = vec![
        MetricRow { metric: "Parcels", value: stats.total.to_string() },
        MetricRow { metric: "Stored", value: stats.stored.to_string() },
        MetricRow { metric: "Retrieved", value: stats.retrieved.to_string() },
        MetricRow { metric: "Units in stock", value: stats.quantity_in_stock.to_string() },
    ];
    Table::new(rows).with(Style::rounded()).to_string()
}
