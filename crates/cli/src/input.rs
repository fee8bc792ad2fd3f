use anyhow::{anyhow, bail, Context, Result};
use kitegrid::api::{LatticePoint, Shape};
use polars::prelude::*;
use std::path::Path;

/// Parse `"i,j"`.
pub fn parse_point(s: &str) -> Result<LatticePoint> {
    let (i, j) = s
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `i,j`, got `{s}`"))?;
    let i = i.trim().parse().with_context(|| format!("bad i in `{s}`"))?;
    let j = j.trim().parse().with_context(|| format!("bad j in `{s}`"))?;
    Ok(LatticePoint::new(i, j))
}

/// Parse `"i,j;i,j;..."`. Empty segments are ignored.
pub fn parse_points(s: &str) -> Result<Shape> {
    s.split(';')
        .filter(|part| !part.trim().is_empty())
        .map(parse_point)
        .collect()
}

/// Read integer columns `i` and `j` from a CSV file.
pub fn read_csv_points(path: &Path) -> Result<Shape> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let is = df.column("i")?.cast(&DataType::Int64)?;
    let js = df.column("j")?.cast(&DataType::Int64)?;
    let mut points = Vec::with_capacity(df.height());
    for (row, (i, j)) in is.i64()?.into_iter().zip(js.i64()?.into_iter()).enumerate() {
        match (i, j) {
            (Some(i), Some(j)) => points.push(LatticePoint::new(i, j)),
            _ => bail!("{}: missing coordinate in row {row}", path.display()),
        }
    }
    tracing::info!(rows = df.height(), path = %path.display(), "read shape csv");
    Ok(points.into_iter().collect())
}

/// A shape argument: a `.csv` path or inline points.
pub fn load_shape(spec: &str) -> Result<Shape> {
    if spec.ends_with(".csv") {
        read_csv_points(Path::new(spec))
    } else {
        parse_points(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_inline_points() {
        let s = parse_points("1,0; 3,-1;;-1, 1").unwrap();
        assert_eq!(
            s.to_vec(),
            vec![
                LatticePoint::new(-1, 1),
                LatticePoint::new(1, 0),
                LatticePoint::new(3, -1)
            ]
        );
        assert!(parse_points("").unwrap().is_empty());
    }

    #[test]
    fn rejects_malformed_points() {
        assert!(parse_point("1").is_err());
        assert!(parse_point("a,2").is_err());
        assert!(parse_points("1,0;2").is_err());
    }

    #[test]
    fn reads_csv_shape() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shape.csv");
        fs::write(&path, "i,j\n1,0\n2,1\n-1,0\n").unwrap();
        let s = load_shape(path.to_str().unwrap()).unwrap();
        assert_eq!(s.len(), 3);
        assert!(s.contains(&LatticePoint::new(-1, 0)));
    }
}
