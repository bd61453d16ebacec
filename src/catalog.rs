//! Text rendering of the dataset index, featured entries first.

use crate::icons::IconKind;
use crate::model::{DatasetIndex, DatasetSummary};
use std::fmt::Write;

/// Featured and regular datasets, each in index order.
pub fn split_featured(index: &DatasetIndex) -> (Vec<&DatasetSummary>, Vec<&DatasetSummary>) {
    index.datasets.iter().partition(|d| d.featured)
}

pub fn catalog_line(dataset: &DatasetSummary) -> String {
    let mut line = format!(
        "{} {} [{}]",
        IconKind::from_name(&dataset.icon).glyph(),
        dataset.name,
        dataset.category
    );
    if !dataset.tags.is_empty() {
        write!(line, " {}", dataset.tags.join(", ")).unwrap();
    }
    line
}

pub fn render_catalog(index: &DatasetIndex) -> String {
    let (featured, regular) = split_featured(index);
    let mut out = String::new();

    if !featured.is_empty() {
        writeln!(out, "Featured Datasets").unwrap();
        for d in &featured {
            writeln!(out, "  {}", catalog_line(d)).unwrap();
        }
    }
    if !regular.is_empty() {
        if !featured.is_empty() {
            writeln!(out, "All Datasets").unwrap();
        }
        for d in &regular {
            writeln!(out, "  {}", catalog_line(d)).unwrap();
        }
    }
    if featured.is_empty() && regular.is_empty() {
        writeln!(out, "No datasets found").unwrap();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, icon: &str, featured: bool) -> DatasetSummary {
        DatasetSummary {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: "E-commerce".to_string(),
            icon: icon.to_string(),
            featured,
            ..Default::default()
        }
    }

    #[test]
    fn test_split_featured_keeps_order() {
        let index = DatasetIndex {
            datasets: vec![
                summary("A", "Database", false),
                summary("B", "Database", true),
                summary("C", "Database", false),
                summary("D", "Database", true),
            ],
        };
        let (featured, regular) = split_featured(&index);

        let names = |v: &[&DatasetSummary]| v.iter().map(|d| d.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&featured), vec!["B", "D"]);
        assert_eq!(names(&regular), vec!["A", "C"]);
    }

    #[test]
    fn test_catalog_line_uses_icon_fallback() {
        let mut d = summary("Shop", "Unknown", false);
        d.tags = vec!["retail".to_string(), "temporal".to_string()];

        assert_eq!(
            catalog_line(&d),
            format!("{} Shop [E-commerce] retail, temporal", IconKind::Database.glyph())
        );
    }

    #[test]
    fn test_render_catalog_sections() {
        let index = DatasetIndex {
            datasets: vec![summary("A", "Film", false), summary("B", "Users", true)],
        };
        let text = render_catalog(&index);

        let featured_at = text.find("Featured Datasets").unwrap();
        let all_at = text.find("All Datasets").unwrap();
        assert!(featured_at < all_at);
        assert!(text.find(" B [").unwrap() < text.find(" A [").unwrap());
    }

    #[test]
    fn test_render_catalog_empty() {
        assert_eq!(render_catalog(&DatasetIndex::default()), "No datasets found\n");
    }
}
