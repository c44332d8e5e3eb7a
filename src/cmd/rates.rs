//! Rates command - the four GST slabs and what falls under each

use crate::gst::GstRate;
use clap::Args;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct RatesCommand {}

#[derive(Debug, Tabled)]
struct RateRow {
    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "CGST + SGST")]
    split: String,

    #[tabled(rename = "Applies to")]
    description: String,
}

impl RatesCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rows: Vec<RateRow> = GstRate::ALL
            .iter()
            .map(|rate| RateRow {
                rate: rate.to_string(),
                split: format!("{}% + {}%", rate.half_pct(), rate.half_pct()),
                description: rate.description().to_string(),
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(..2)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        Ok(())
    }
}
