//! Export rooms or items to an `.xlsx` file on disk

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use inventory_server::db::{ItemRepo, RoomRepo};
use inventory_server::export::{self, SheetLayout, ITEMS_LAYOUT, ROOMS_LAYOUT};
use inventory_server::models::{ItemFilter, RoomFilterParams};
use inventory_server::Database;

use super::DatabaseArgs;

#[derive(Parser, Debug)]
pub struct ExportArgs {
    #[command(subcommand)]
    pub target: ExportTarget,

    /// Output file (default: rooms.xlsx / items.xlsx in the current directory)
    #[arg(long = "out", short = 'o', value_name = "PATH", global = true)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

#[derive(Subcommand, Debug)]
pub enum ExportTarget {
    /// Export rooms, optionally filtered
    Rooms(RoomFilterArgs),
    /// Export items with their rooms, optionally filtered
    Items(ItemFilterArgs),
}

/// Same filters as GET /rooms
#[derive(Args, Debug, Default)]
pub struct RoomFilterArgs {
    /// Name contains (case-insensitive)
    #[arg(long)]
    pub name: Option<String>,
    /// Number contains
    #[arg(long)]
    pub number: Option<String>,
    /// Floor contains
    #[arg(long)]
    pub floor: Option<String>,
    /// Teacher contains
    #[arg(long)]
    pub teacher: Option<String>,
    /// Minimum capacity
    #[arg(long)]
    pub capacity_min: Option<u32>,
    /// Maximum capacity
    #[arg(long)]
    pub capacity_max: Option<u32>,
}

impl From<RoomFilterArgs> for RoomFilterParams {
    fn from(args: RoomFilterArgs) -> Self {
        Self {
            name: args.name.unwrap_or_default(),
            number: args.number.unwrap_or_default(),
            floor: args.floor.unwrap_or_default(),
            teacher: args.teacher.unwrap_or_default(),
            capacity_min: args.capacity_min.map(|n| n.to_string()).unwrap_or_default(),
            capacity_max: args.capacity_max.map(|n| n.to_string()).unwrap_or_default(),
        }
    }
}

/// Same filters as GET /items
#[derive(Args, Debug, Default)]
pub struct ItemFilterArgs {
    /// Item name contains
    #[arg(long)]
    pub name: Option<String>,
    /// Inventory number contains
    #[arg(long)]
    pub inventory_number: Option<String>,
    /// Status equals
    #[arg(long)]
    pub status: Option<String>,
    /// Room name contains
    #[arg(long)]
    pub room_name: Option<String>,
    /// Room number contains
    #[arg(long)]
    pub room_number: Option<String>,
}

impl From<ItemFilterArgs> for ItemFilter {
    fn from(args: ItemFilterArgs) -> Self {
        Self {
            name: args.name.unwrap_or_default(),
            inventory_number: args.inventory_number.unwrap_or_default(),
            status: args.status.unwrap_or_default(),
            room_name: args.room_name.unwrap_or_default(),
            room_number: args.room_number.unwrap_or_default(),
        }
    }
}

fn output_path(output: Option<PathBuf>, layout: &SheetLayout) -> PathBuf {
    output.unwrap_or_else(|| PathBuf::from(layout.file_name))
}

fn write_workbook(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}

pub async fn run_export(args: ExportArgs) -> Result<()> {
    let db = Database::new(args.db.to_config()?);
    let pool = db.acquire().await.context("Database unavailable")?;

    let (path, rows) = match args.target {
        ExportTarget::Rooms(filters) => {
            let filter = RoomFilterParams::from(filters)
                .parse()
                .context("Invalid room filter")?;
            let rooms = RoomRepo::new(&pool).list(&filter).await?;
            let path = output_path(args.output, &ROOMS_LAYOUT);
            write_workbook(&path, &export::rooms_workbook(&rooms)?)?;
            (path, rooms.len())
        }
        ExportTarget::Items(filters) => {
            let items = ItemRepo::new(&pool).list(&filters.into()).await?;
            let path = output_path(args.output, &ITEMS_LAYOUT);
            write_workbook(&path, &export::items_workbook(&items)?)?;
            (path, items.len())
        }
    };

    db.close().await;
    println!("Exported {} row(s) to {}", rows, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_args_become_query_params() {
        let args = RoomFilterArgs {
            teacher: Some("Ivanova".into()),
            capacity_min: Some(20),
            ..Default::default()
        };
        let filter = RoomFilterParams::from(args).parse().unwrap();
        assert_eq!(filter.teacher, "Ivanova");
        assert_eq!(filter.capacity_min, Some(20));
        assert!(filter.name.is_empty());
    }

    #[test]
    fn default_output_uses_layout_name() {
        assert_eq!(output_path(None, &ITEMS_LAYOUT), PathBuf::from("items.xlsx"));
        assert_eq!(
            output_path(Some("out/x.xlsx".into()), &ROOMS_LAYOUT),
            PathBuf::from("out/x.xlsx")
        );
    }

    #[test]
    fn write_workbook_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("rooms.xlsx");
        let err = write_workbook(&path, b"x").unwrap_err();
        assert!(err.to_string().contains("rooms.xlsx"));

        let ok = dir.path().join("rooms.xlsx");
        write_workbook(&ok, b"x").unwrap();
        assert_eq!(std::fs::read(&ok).unwrap(), b"x");
    }
}
