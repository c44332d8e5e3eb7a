//! Session command - interactive calculator with a bounded history ledger.
//!
//! The ledger is created when the session starts, owned by the session value,
//! and dropped when the session ends. Nothing is persisted.

use crate::cmd::{format_inr, parse_amount, parse_increment};
use crate::gst::{GstBreakdown, GstRate, Rounding};
use crate::history::{export, HistoryLedger, Mode};
use anyhow::anyhow;
use clap::Args;
use rust_decimal::Decimal;
use std::fs;
use std::io::{self, BufRead, Write};
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table,
};

#[derive(Args, Debug)]
pub struct SessionCommand {
    /// Initial GST rate in percent (5, 12, 18 or 28)
    #[arg(short, long, default_value_t = 18)]
    rate: u32,
}

impl SessionCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rate = GstRate::from_pct(self.rate)
            .ok_or_else(|| anyhow!("GST rate must be one of 5, 12, 18 or 28 (got {})", self.rate))?;

        let mut session = Session {
            rate,
            rounding: Rounding::None,
            ledger: HistoryLedger::new(),
        };

        println!(
            "GST calculator session (rate {}, no rounding). Type 'help' for commands.",
            session.rate
        );
        prompt()?;

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            match session.dispatch(line.trim()) {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(err) => println!("error: {:#}", err),
            }
            prompt()?;
        }
        Ok(())
    }
}

fn prompt() -> io::Result<()> {
    print!("gst> ");
    io::stdout().flush()
}

struct Session {
    rate: GstRate,
    rounding: Rounding,
    ledger: HistoryLedger,
}

impl Session {
    /// Handle one input line; returns false when the session should end
    fn dispatch(&mut self, line: &str) -> anyhow::Result<bool> {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(true);
        };

        match command {
            "excl" => self.calculate(Mode::ExcludedToIncluded, amount_arg(tokens.next())?)?,
            "incl" => self.calculate(Mode::IncludedToExcluded, amount_arg(tokens.next())?)?,
            "gst" => self.calculate(Mode::GstAmountToBase, amount_arg(tokens.next())?)?,
            "rate" => self.set_rate(tokens.next())?,
            "round" => self.set_rounding(tokens.next())?,
            "history" => self.print_history(),
            "export" => self.export(tokens.next(), tokens.next())?,
            "clear" => {
                self.ledger.clear();
                println!("History cleared.");
            }
            "help" => print_help(),
            "quit" | "exit" => return Ok(false),
            other => println!("Unknown command '{}'. Type 'help' for commands.", other),
        }
        Ok(true)
    }

    fn calculate(&mut self, mode: Mode, amount: Decimal) -> anyhow::Result<()> {
        let rate = self.rate.fraction();
        let breakdown = match mode {
            Mode::ExcludedToIncluded => GstBreakdown::from_excluded(amount, rate, self.rounding),
            Mode::IncludedToExcluded => GstBreakdown::from_included(amount, rate, self.rounding),
            // a failed conversion records nothing
            Mode::GstAmountToBase => GstBreakdown::from_gst_amount(amount, rate, self.rounding)?,
        };

        self.ledger.record(mode, breakdown);
        log::debug!("recorded {} entry, ledger length {}", mode, self.ledger.len());

        println!("  Base (excluding GST): {}", format_inr(breakdown.base));
        println!(
            "  GST ({}): {} | CGST {}%: {} | SGST {}%: {}",
            self.rate,
            format_inr(breakdown.gst),
            self.rate.half_pct(),
            format_inr(breakdown.cgst),
            self.rate.half_pct(),
            format_inr(breakdown.sgst)
        );
        println!("  Total (including GST): {}", format_inr(breakdown.total));
        Ok(())
    }

    fn set_rate(&mut self, arg: Option<&str>) -> anyhow::Result<()> {
        let pct: u32 = arg
            .ok_or_else(|| anyhow!("usage: rate <5|12|18|28>"))?
            .parse()
            .map_err(|_| anyhow!("usage: rate <5|12|18|28>"))?;
        self.rate = GstRate::from_pct(pct)
            .ok_or_else(|| anyhow!("GST rate must be one of 5, 12, 18 or 28 (got {})", pct))?;
        println!("Rate set to {} ({})", self.rate, self.rate.description());
        Ok(())
    }

    fn set_rounding(&mut self, arg: Option<&str>) -> anyhow::Result<()> {
        let arg = arg.ok_or_else(|| anyhow!("usage: round <increment>|none"))?;
        self.rounding = match arg {
            "none" | "off" => Rounding::None,
            "rupee" => Rounding::rupee(),
            "half" => Rounding::half_rupee(),
            s => Rounding::Nearest(parse_increment(s).map_err(|e| anyhow!(e))?),
        };
        match self.rounding {
            Rounding::None => println!("Rounding disabled"),
            Rounding::Nearest(inc) => println!("Rounding to the nearest ₹{}", inc.normalize()),
        }
        Ok(())
    }

    fn print_history(&self) {
        if self.ledger.is_empty() {
            println!("No calculations recorded yet.");
            return;
        }

        let table = Table::new(export::rows(&self.ledger))
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }

    fn export(&self, format: Option<&str>, path: Option<&str>) -> anyhow::Result<()> {
        match format {
            Some("csv") => match export::to_csv(&self.ledger)? {
                None => println!("History is empty, nothing to export."),
                Some(bytes) => {
                    let path = path.unwrap_or("gst_history.csv");
                    fs::write(path, bytes)?;
                    println!("History written to {}", path);
                }
            },
            Some("txt") => match export::to_txt(&self.ledger) {
                None => println!("History is empty, nothing to export."),
                Some(report) => {
                    let path = path.unwrap_or("gst_history.txt");
                    fs::write(path, report)?;
                    println!("History written to {}", path);
                }
            },
            Some("html") => match export::to_html(&self.ledger) {
                None => println!("History is empty, nothing to export."),
                Some(html) => match path {
                    Some(path) => {
                        fs::write(path, html)?;
                        println!("History written to {}", path);
                    }
                    None => {
                        // no path: write to a temp file and open in the browser
                        let temp_path = std::env::temp_dir().join("gst_history.html");
                        fs::write(&temp_path, html)?;
                        opener::open(&temp_path)?;
                        println!("Opened history in browser: {}", temp_path.display());
                    }
                },
            },
            Some(other) => println!("Unknown export format '{}'. Use csv, txt or html.", other),
            None => println!("usage: export <csv|txt|html> [path]"),
        }
        Ok(())
    }
}

fn amount_arg(arg: Option<&str>) -> anyhow::Result<Decimal> {
    let arg = arg.ok_or_else(|| anyhow!("missing amount, e.g. 'excl 100'"))?;
    parse_amount(arg).map_err(|e| anyhow!(e))
}

fn print_help() {
    println!("Commands:");
    println!("  excl <amount>            calculate from a base price excluding GST");
    println!("  incl <amount>            calculate from a total price including GST");
    println!("  gst <amount>             derive base and total from a GST amount");
    println!("  rate <5|12|18|28>        switch the GST rate");
    println!("  round <increment>|rupee|half|none   round results to the nearest multiple");
    println!("  history                  show the last 10 calculations");
    println!("  export <csv|txt|html> [path]   write the history to a file");
    println!("  clear                    discard the history");
    println!("  quit                     end the session");
}
