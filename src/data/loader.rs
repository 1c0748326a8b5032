use std::io;
use std::path::Path;

use super::model::Series;

// ---------------------------------------------------------------------------
// XVG loader
// ---------------------------------------------------------------------------

/// Header/comment markers written by GROMACS analysis tools.
const COMMENT_MARKERS: [char; 2] = ['#', '@'];

/// Read an XVG file into a [`Series`].
///
/// Only a failure to read the file at all is an error; malformed rows are
/// dropped by [`parse_xvg`]. Invalid UTF-8 is replaced rather than rejected.
pub fn load_xvg(path: &Path) -> io::Result<Series> {
    let bytes = std::fs::read(path)?;
    Ok(parse_xvg(&String::from_utf8_lossy(&bytes)))
}

/// Parse XVG text:
///
/// ```text
/// # comment
/// @    title "RMSD"
/// 0.000  0.0005
/// 10.00  0.1021   (extra columns ignored)
/// ```
///
/// A row contributes a point only when its first two whitespace-separated
/// tokens both parse as `f64`.
pub fn parse_xvg(text: &str) -> Series {
    text.lines()
        .filter(|line| !line.starts_with(COMMENT_MARKERS))
        .filter_map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> Option<(f64, f64)> {
    let mut tokens = line.split_whitespace();
    let x = tokens.next()?.parse::<f64>().ok()?;
    let y = tokens.next()?.parse::<f64>().ok()?;
    Some((x, y))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn skips_headers_and_malformed_rows() {
        let text = "\
# GROMACS output
@    title \"RMSD\"
@ xaxis  label \"Time (ps)\"
0.0 0.10
1.0
abc 0.3
2.0 xyz
3.0 0.30 99.0

4.0\t0.40
";
        let series = parse_xvg(text);
        assert_eq!(series.x, vec![0.0, 3.0, 4.0]);
        assert_eq!(series.y, vec![0.10, 0.30, 0.40]);
    }

    #[test]
    fn n_good_rows_give_n_points_in_order() {
        let mut text = String::new();
        for i in 0..50 {
            text.push_str(&format!("{i} {}\n", i * 2));
            if i % 7 == 0 {
                text.push_str("garbage line\n");
                text.push_str("@ legend on\n");
            }
        }
        let series = parse_xvg(&text);
        assert_eq!(series.len(), 50);
        assert!(series.x.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(series.y[49], 98.0);
    }

    #[test]
    fn comment_marker_only_at_line_start() {
        // Indented markers are not comments, but still fail to parse as rows.
        let series = parse_xvg("  # 1 2\n1 2\n");
        assert_eq!(series.len(), 1);
    }

    #[test]
    fn header_only_file_is_empty_series() {
        let series = parse_xvg("# nothing\n@ type xy\n");
        assert!(series.is_empty());
    }

    #[test]
    fn load_tolerates_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"# \xff\xfe header\n1.0 2.0\n\xff 3.0\n2.0 4.0\n")
            .unwrap();
        let series = load_xvg(file.path()).unwrap();
        assert_eq!(series.x, vec![1.0, 2.0]);
        assert_eq!(series.y, vec![2.0, 4.0]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_xvg(&dir.path().join("absent.xvg")).is_err());
    }
}
