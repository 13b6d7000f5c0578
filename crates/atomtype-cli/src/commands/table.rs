use crate::cli::TableArgs;
use crate::error::Result;
use atomtype::core::params::{GNINA_TYPE_INFO, GninaTypeInfo};
use std::io::Write;

const COLUMNS: [&str; 14] = [
    "index",
    "name",
    "ad_name",
    "atomic_number",
    "ad_radius",
    "ad_depth",
    "ad_solvation",
    "ad_volume",
    "covalent_radius",
    "xs_radius",
    "xs_hydrophobe",
    "xs_donor",
    "xs_acceptor",
    "ad_heteroatom",
];

pub fn run(args: TableArgs) -> Result<()> {
    let stdout = std::io::stdout();
    write_table(&GNINA_TYPE_INFO, args.tsv, &mut stdout.lock())
}

fn row(index: usize, info: &GninaTypeInfo) -> [String; 14] {
    [
        index.to_string(),
        info.name.to_string(),
        info.ad_name.to_string(),
        info.atomic_number.to_string(),
        format!("{:.3}", info.ad_radius),
        format!("{:.4}", info.ad_depth),
        format!("{:.5}", info.ad_solvation),
        format!("{:.4}", info.ad_volume),
        format!("{:.2}", info.covalent_radius),
        format!("{:.2}", info.xs_radius),
        info.xs_hydrophobe.to_string(),
        info.xs_donor.to_string(),
        info.xs_acceptor.to_string(),
        info.ad_heteroatom.to_string(),
    ]
}

fn write_table(table: &[GninaTypeInfo], tsv: bool, out: &mut impl Write) -> Result<()> {
    let header = COLUMNS.map(String::from);
    let rows: Vec<[String; 14]> = table
        .iter()
        .enumerate()
        .map(|(index, info)| row(index, info))
        .collect();

    if tsv {
        for cells in std::iter::once(&header).chain(rows.iter()) {
            writeln!(out, "{}", cells.join("\t"))?;
        }
        return Ok(());
    }

    let mut widths = [0usize; 14];
    for cells in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.len());
        }
    }
    for cells in std::iter::once(&header).chain(rows.iter()) {
        let line = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
