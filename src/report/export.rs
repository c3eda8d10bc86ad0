use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Paper, COLUMNS};

/// Write a header row and one row per paper. List fields are `; `-joined and a
/// missing email is written as `N/A`.
pub fn write_csv<W: Write>(papers: &[Paper], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(COLUMNS)
        .context("Failed to write CSV header")?;
    for paper in papers {
        wtr.write_record(paper.to_row())
            .with_context(|| format!("Failed to write CSV row for {}", paper.id))?;
    }
    wtr.flush().context("Failed to flush CSV")?;
    Ok(())
}

pub fn write_csv_file(papers: &[Paper], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_csv(papers, file)
}

pub fn to_json(papers: &[Paper]) -> Result<String> {
    Ok(serde_json::to_string_pretty(papers)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn papers() -> Vec<Paper> {
        vec![
            Paper {
                id: "1".to_string(),
                title: "Antibodies, revisited".to_string(),
                publication_date: "2022-Feb".to_string(),
                non_academic_authors: vec!["Doe Jane".to_string(), "Roe Rick".to_string()],
                company_affiliations: vec!["Acme Pharma Inc.".to_string()],
                corresponding_email: None,
            },
            Paper {
                id: "2".to_string(),
                title: "Assays".to_string(),
                publication_date: "N/A".to_string(),
                non_academic_authors: vec!["Lee Sam".to_string()],
                company_affiliations: vec!["Beta Biotech".to_string(), "Gamma Corp".to_string()],
                corresponding_email: Some("sam@beta.bio".to_string()),
            },
        ]
    }

    #[test]
    fn test_csv_layout() {
        let mut out = Vec::new();
        write_csv(&papers(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "PubmedID,Title,Publication Date,Non-academic Author(s),Company Affiliation(s),Corresponding Author Email"
        );
        assert_eq!(
            lines[1],
            "1,\"Antibodies, revisited\",2022-Feb,Doe Jane; Roe Rick,Acme Pharma Inc.,N/A"
        );
        assert_eq!(
            lines[2],
            "2,Assays,N/A,Lee Sam,Beta Biotech; Gamma Corp,sam@beta.bio"
        );
    }

    #[test]
    fn test_csv_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        write_csv_file(&papers(), &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let headers = rdr.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), COLUMNS);
        assert_eq!(rdr.records().count(), 2);
    }

    #[test]
    fn test_json_keeps_lists() {
        let json: serde_json::Value = serde_json::from_str(&to_json(&papers()).unwrap()).unwrap();
        assert_eq!(json[1]["Company Affiliation(s)"][1], "Gamma Corp");
        assert_eq!(json[1]["Corresponding Author Email"], "sam@beta.bio");
    }
}
