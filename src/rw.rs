use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::LOGS_SUBDIR;

/// Reads a JSON config, falling back to defaults when there is no such file yet.
pub(crate) fn read<T: DeserializeOwned + Default>(folder: impl AsRef<Path>, file: impl AsRef<Path>) -> anyhow::Result<T> {
  let mut path = PathBuf::new();
  path.push(folder);
  path.push(file);

  if !path.exists() { return Ok(T::default()) }
  read_checked(&path)
}

pub(crate) fn read_checked<T: DeserializeOwned>(filepath: impl AsRef<Path>) -> anyhow::Result<T> {
  let file = File::open(filepath.as_ref())
    .with_context(|| format!("Can't open `{}` config file!", filepath.as_ref().display()))?;
  let reader = BufReader::new(file);

  serde_json::from_reader(reader)
    .with_context(|| format!("Can't parse `{}` config file!", filepath.as_ref().display()))
}

pub(crate) fn write<T: Serialize>(folder: impl AsRef<Path>, file: impl AsRef<Path>, config: &T) -> anyhow::Result<()> {
  std::fs::create_dir_all(folder.as_ref())
    .with_context(|| format!("Can't create `{}` folder!", folder.as_ref().display()))?;

  let mut path = PathBuf::new();
  path.push(folder);
  path.push(file.as_ref());
  let f = File::create(&path).with_context(|| format!("Can't save `{}` config file!", path.display()))?;

  let mut writer = BufWriter::new(f);
  serde_json::to_writer_pretty(&mut writer, config)
    .with_context(|| format!("Can't save `{}` config file due to serialization error!", path.display()))?;
  writer.flush()?;

  Ok(())
}

pub(crate) fn generate_build_log_filepath(cache_dir: &Path) -> PathBuf {
  let name = format!("purge-{}.log", chrono::Local::now().format("%Y-%m-%dT%H-%M-%S"));
  cache_dir.join(LOGS_SUBDIR).join(name)
}

/// Build log sink: echoes every line to the console and appends it, without colors, to a log file.
pub(crate) struct BuildLog {
  file: BufWriter<File>,
  console: bool,
  line: Vec<u8>,
}

impl BuildLog {
  pub(crate) fn open(path: &Path, console: bool) -> anyhow::Result<Self> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).with_context(|| format!("Can't create `{}` folder!", parent.display()))?;
    }
    let file = OpenOptions::new()
      .create(true)
      .append(true)
      .open(path)
      .with_context(|| format!("Can't open `{}` log file!", path.display()))?;

    Ok(Self { file: BufWriter::new(file), console, line: vec![] })
  }

  fn flush_line(&mut self) -> std::io::Result<()> {
    if self.line.is_empty() { return Ok(()) }

    if self.console {
      std::io::stdout().write_all(&self.line)?;
    }
    self.file.write_all(&strip_ansi_escapes::strip(&self.line))?;
    self.line.clear();
    Ok(())
  }
}

impl Write for BuildLog {
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    for chunk in buf.split_inclusive(|b| *b == b'\n') {
      self.line.extend_from_slice(chunk);
      if chunk.ends_with(b"\n") { self.flush_line()?; }
    }
    Ok(buf.len())
  }

  fn flush(&mut self) -> std::io::Result<()> {
    self.flush_line()?;
    std::io::stdout().flush()?;
    self.file.flush()
  }
}

impl Drop for BuildLog {
  fn drop(&mut self) {
    let _ = self.flush();
  }
}

/// Appends lines to the build log.
pub(crate) fn build_log(log: &mut impl Write, lines: &[String]) -> anyhow::Result<()> {
  for line in lines {
    writeln!(log, "{}", line)?;
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::configs::PurgeProjectOptions;

  #[test]
  fn missing_config_reads_as_default() {
    let dir = tempfile::tempdir().unwrap();
    let opts: PurgeProjectOptions = read(dir.path(), "nothing.json").unwrap();
    assert_eq!(opts, PurgeProjectOptions::default());
  }

  #[test]
  fn broken_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.json"), "{ nope").unwrap();
    assert!(read::<PurgeProjectOptions>(dir.path(), "broken.json").is_err());
  }

  #[test]
  fn write_then_read() {
    let dir = tempfile::tempdir().unwrap();
    let mut opts = PurgeProjectOptions::default();
    opts.build_counter = 41;
    write(dir.path().join("nested"), "cfg.json", &opts).unwrap();
    let back: PurgeProjectOptions = read(dir.path().join("nested"), "cfg.json").unwrap();
    assert_eq!(back.build_counter, 41);
  }

  #[test]
  fn build_log_strips_colors_in_file() {
    use colored::Colorize;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("purge.log");
    {
      let mut log = BuildLog::open(&path, false).unwrap();
      colored::control::set_override(true);
      build_log(&mut log, &[format!("Repository `{}`: {}", "/r", "purged".green())]).unwrap();
      write!(log, "partial").unwrap();
    }

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Repository `/r`: purged\npartial");
  }
}
