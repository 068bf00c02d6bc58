use crate::error::CliError;
use model::{
    ingestion::{IngestionItem, IngestionRun, ItemStatus, ProcessOutcome},
    inventory::InventoryRow,
    replenishment::PendingProduct,
    sales::{PointOfSale, SaleRecord},
};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value).map_err(CliError::JsonSerialize)?;
    println!("{json}");
    Ok(())
}

pub fn print_run(run: &IngestionRun, as_json: bool) -> Result<(), CliError> {
    if as_json {
        return print_json(run);
    }
    println!("Run {}", run.id);
    println!("-----------------------------");
    println!("{:<16} {}", "Source", run.source);
    println!("{:<16} {}", "Status", run.status);
    println!("{:<16} {}", "Total rows", run.total_rows);
    println!("{:<16} {}", "Processed", run.processed_rows);
    println!("{:<16} {}", "Errors", run.error_rows);
    println!("{:<16} {}", "Created", run.created_at.to_rfc3339());
    let finished = run
        .finished_at
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_else(|| "n/a".to_string());
    println!("{:<16} {}", "Finished", finished);
    if let Some(notes) = &run.notes {
        println!("{:<16} {}", "Notes", notes);
    }
    Ok(())
}

pub fn print_outcome(outcome: &ProcessOutcome) {
    println!(
        "Rows: {} | OK: {} | Errors: {}",
        outcome.processed, outcome.succeeded, outcome.failed
    );
    if outcome.is_partial_failure() {
        println!("Some rows failed; run `status --items` for per-row errors.");
    }
}

pub fn print_items(items: &[IngestionItem]) {
    println!("{} staged rows", items.len());
    for item in items {
        let sku = item.raw.sku.as_deref().unwrap_or("-");
        match (&item.status, &item.error_text) {
            (ItemStatus::Error, Some(error)) => println!("  {sku:<16} error: {error}"),
            (ItemStatus::Error, None) => println!("  {sku:<16} error"),
            (status, _) => println!("  {sku:<16} {status:?}"),
        }
    }
}

pub fn print_sales(sales: &[SaleRecord], as_json: bool) -> Result<(), CliError> {
    if as_json {
        return print_json(&sales);
    }
    println!(
        "{:<22} {:<14} {:<28} {:>4} {:>6}",
        "Date", "SKU", "Product", "Qty", "Left"
    );
    for sale in sales {
        let remaining = sale
            .remaining_stock
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<22} {:<14} {:<28} {:>4} {:>6}",
            sale.sale_date.format("%Y-%m-%d %H:%M"),
            sale.sku,
            sale.product_name,
            sale.quantity_sold,
            remaining
        );
    }
    Ok(())
}

pub fn print_points_of_sale(points: &[PointOfSale]) {
    for point in points {
        let location = point.location.as_deref().unwrap_or("-");
        println!("{}  {:<24} {}", point.id, point.name, location);
    }
    println!("{} points of sale", points.len());
}

pub fn print_inventory(rows: &[InventoryRow], as_json: bool) -> Result<(), CliError> {
    if as_json {
        return print_json(&rows);
    }
    println!(
        "{:<14} {:<32} {:>6} {:>6} {:>8}  {}",
        "SKU", "Name", "Floor", "Whse", "Total", "Location"
    );
    for row in rows {
        println!(
            "{:<14} {:<32} {:>6} {:>6} {:>8}  {}",
            row.sku,
            row.name,
            row.stock_sala,
            row.stock_almacen,
            row.total_stock(),
            row.location
        );
    }
    println!("{} products", rows.len());
    Ok(())
}

pub fn print_pending(products: &[PendingProduct], as_json: bool) -> Result<(), CliError> {
    if as_json {
        return print_json(&products);
    }
    if products.is_empty() {
        println!("Replenishment queue is empty.");
        return Ok(());
    }
    println!(
        "{:<12} {:<32} {:<8} {:<10} {:>6}",
        "Location", "Name", "Size", "Priority", "Owed"
    );
    for product in products {
        println!(
            "{:<12} {:<32} {:<8} {:<10?} {:>6}",
            product.location, product.name, product.size, product.priority, product.quantity_needed
        );
    }
    Ok(())
}
