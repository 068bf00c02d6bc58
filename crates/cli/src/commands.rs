use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand)]
pub enum Commands {
    /// Stage a CSV file as an ingestion run (the wizard, headless)
    Ingest {
        #[arg(long, help = "CSV file to ingest")]
        file: String,

        #[arg(long, help = "JSON mapping file: CSV header -> destination field")]
        mapping: String,

        #[arg(long, default_value = "csv", help = "Source tag recorded on the run")]
        source: String,

        #[arg(long, help = "Notes for the run; defaults to the file name")]
        notes: Option<String>,

        #[arg(long, help = "Brand substituted when a row's brand is empty")]
        default_brand: Option<String>,

        #[arg(long, help = "Supervisor password for the CSV gate")]
        password: String,

        #[arg(long, help = "Process the run immediately after staging")]
        process: bool,
    },
    /// Invoke the remote processor for a staged run
    Process {
        #[arg(long, help = "Run ID to process")]
        run: String,

        #[arg(long, help = "Tenant the run belongs to")]
        tenant: Option<Uuid>,
    },
    /// Show a run's status and row counts
    Status {
        #[arg(long, help = "Run ID to inspect")]
        run: String,

        #[arg(long, help = "Also list the run's staged rows with per-row errors")]
        items: bool,

        #[arg(long, help = "Print the run as JSON instead of a table")]
        json: bool,
    },
    /// Inventory listing and maintenance
    Inventory {
        #[command(subcommand)]
        command: InventoryCommand,
    },
    /// Register a sale as one atomic point-of-sale event
    Sell {
        #[arg(long)]
        sku: String,

        #[arg(long, default_value_t = 1)]
        quantity: i64,

        #[arg(long, help = "Point of sale the sale happened at")]
        pos: Option<Uuid>,
    },
    /// Show recent sales history
    Sales {
        #[arg(long, default_value_t = 50, help = "Number of sales to show")]
        limit: u32,

        #[arg(long, help = "Print sales as JSON instead of a table")]
        json: bool,
    },
    /// List the configured points of sale
    Pos,
    /// Show the replenishment queue in picking order
    Pending {
        #[arg(long, help = "Print the queue as JSON instead of a table")]
        json: bool,
    },
    /// Move one unit warehouse -> floor for a queued product
    Restock {
        #[arg(long, help = "Inventory ID to restock")]
        id: Uuid,
    },
}

#[derive(Subcommand)]
pub enum InventoryCommand {
    List {
        #[arg(long, help = "Case-insensitive match over name, sku and size")]
        search: Option<String>,

        #[arg(long, help = "Keep only these sizes")]
        size: Vec<String>,

        #[arg(long, help = "Keep only these colors")]
        color: Vec<String>,

        #[arg(long)]
        zone: Option<String>,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long, help = "Keep only products with low total stock")]
        low_stock: bool,

        #[arg(long, help = "Print rows as JSON instead of a table")]
        json: bool,
    },
    Add {
        #[arg(long)]
        sku: String,

        #[arg(long)]
        name: String,

        #[arg(long)]
        size: String,

        #[arg(long)]
        color: String,

        #[arg(long)]
        gender: Option<String>,

        #[arg(long)]
        brand: Option<String>,

        #[arg(long, help = "Category; inferred from the name when omitted")]
        category: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long, default_value_t = 0)]
        stock_sala: i64,

        #[arg(long, default_value_t = 0)]
        stock_almacen: i64,

        #[arg(long)]
        location: String,

        #[arg(long)]
        zone: String,
    },
    /// Soft-delete a product
    Remove {
        #[arg(long, help = "Inventory ID to remove")]
        id: Uuid,
    },
}
