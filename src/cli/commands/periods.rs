use crate::config::Config;
use crate::errors::AppResult;
use crate::models::period::PayPeriodTable;
use crate::utils::table::Table;

/// Print the pay-period table generated from the configured anchor and count.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let periods = PayPeriodTable::generate(cfg.anchor()?, cfg.period_count)?;

    let mut table = Table::new(&["#", "Start", "End", "Label"]);
    for (i, p) in periods.periods().iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            p.start.format("%Y-%m-%d").to_string(),
            p.end.format("%Y-%m-%d").to_string(),
            p.label.clone(),
        ]);
    }

    println!("{}", table.render());
    println!("{} period(s) from anchor {}.", periods.len(), cfg.anchor_date);

    Ok(())
}
