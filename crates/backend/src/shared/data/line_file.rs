//! Текстовые файлы "одна запись на строку" (история адресов, курьеры)

use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Читает непустые строки без пробелов по краям.
/// Отсутствующий файл даёт `Ok(None)`.
pub fn read_lines(path: &Path) -> io::Result<Option<Vec<String>>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)?;
    let lines = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Ok(Some(lines))
}

/// Перезаписывает файл целиком; пустые записи пропускаются
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = io::BufWriter::new(fs::File::create(path)?);
    for line in lines {
        let line = line.as_ref().trim();
        if !line.is_empty() {
            writeln!(file, "{}", line)?;
        }
    }
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_lines(&dir.path().join("nope.txt")).unwrap(), None);
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lines.txt");

        write_lines(&path, &["  first ", "", "second"]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
        assert_eq!(
            read_lines(&path).unwrap(),
            Some(vec!["first".to_string(), "second".to_string()])
        );
    }
}
