//! Calc command - one-shot conversion between GST-inclusive and -exclusive prices

use crate::cmd::{format_inr, parse_amount, parse_increment};
use crate::gst::{GstBreakdown, GstRate, Rounding};
use anyhow::anyhow;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct CalcCommand {
    /// Which price the amount represents
    #[arg(short, long, value_enum)]
    mode: CalcMode,

    /// The amount in rupees
    #[arg(short, long, value_parser = parse_amount)]
    amount: Decimal,

    /// GST rate in percent (5, 12, 18 or 28)
    #[arg(short, long, default_value_t = 18)]
    rate: u32,

    /// Round derived amounts to the nearest multiple of this increment (e.g. 1 or 0.5)
    #[arg(long, value_name = "INCREMENT", value_parser = parse_increment)]
    round: Option<Decimal>,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CalcMode {
    /// Amount is the base price excluding GST
    Excluded,
    /// Amount is the total price including GST
    Included,
    /// Amount is the GST amount itself
    GstAmount,
}

/// Breakdown for JSON output, every field pre-formatted
#[derive(Debug, Serialize)]
struct BreakdownData {
    mode: String,
    rate_pct: String,
    base: String,
    gst: String,
    cgst: String,
    sgst: String,
    total: String,
}

impl CalcCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rate = GstRate::from_pct(self.rate)
            .ok_or_else(|| anyhow!("GST rate must be one of 5, 12, 18 or 28 (got {})", self.rate))?;
        let rounding = self.round.map_or(Rounding::None, Rounding::Nearest);

        let breakdown = match self.mode {
            CalcMode::Excluded => {
                GstBreakdown::from_excluded(self.amount, rate.fraction(), rounding)
            }
            CalcMode::Included => {
                GstBreakdown::from_included(self.amount, rate.fraction(), rounding)
            }
            CalcMode::GstAmount => {
                GstBreakdown::from_gst_amount(self.amount, rate.fraction(), rounding)?
            }
        };

        if self.json {
            self.print_json(rate, &breakdown)
        } else {
            self.print_breakdown(rate, &breakdown);
            Ok(())
        }
    }

    fn print_breakdown(&self, rate: GstRate, b: &GstBreakdown) {
        println!();
        println!("GST BREAKDOWN ({})", rate);
        println!();
        println!("  Base (excluding GST): {}", format_inr(b.base));
        println!(
            "  GST: {} (CGST {}%: {} | SGST {}%: {})",
            format_inr(b.gst),
            rate.half_pct(),
            format_inr(b.cgst),
            rate.half_pct(),
            format_inr(b.sgst)
        );
        println!("  Total (including GST): {}", format_inr(b.total));
        println!();
    }

    fn print_json(&self, rate: GstRate, b: &GstBreakdown) -> anyhow::Result<()> {
        let mode = match self.mode {
            CalcMode::Excluded => "excluded",
            CalcMode::Included => "included",
            CalcMode::GstAmount => "gst-amount",
        };
        let data = BreakdownData {
            mode: mode.to_string(),
            rate_pct: rate.pct().to_string(),
            base: format!("{:.2}", b.base),
            gst: format!("{:.2}", b.gst),
            cgst: format!("{:.2}", b.cgst),
            sgst: format!("{:.2}", b.sgst),
            total: format!("{:.2}", b.total),
        };

        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }
}
