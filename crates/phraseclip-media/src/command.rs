//! FFmpeg trim command builder and runner.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;
use tracing::debug;

use crate::error::{MediaError, MediaResult};

/// Builder for a single FFmpeg invocation that cuts one source file into
/// many clips.
///
/// One decode of the source is expensive; batching several cuts into one
/// process amortizes the spawn and decode cost across the batch. Each cut
/// contributes its own `-ss <start> -to <end> [-filter:a volume=<v>]
/// <output>` group after the shared `-i <input>`.
#[derive(Debug, Clone)]
pub struct TrimCommand {
    /// Input file path
    input: PathBuf,
    /// One `(start, end, output)` group per clip
    cuts: Vec<CutArgs>,
    /// Audio volume multiplier applied to every output
    audio_volume: Option<f64>,
    /// Whether to overwrite outputs
    overwrite: bool,
    /// Log level
    log_level: String,
}

#[derive(Debug, Clone)]
struct CutArgs {
    start_secs: f64,
    end_secs: f64,
    output: PathBuf,
}

impl TrimCommand {
    /// Create a new trim command for a source file.
    pub fn new(input: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            cuts: Vec::new(),
            audio_volume: None,
            overwrite: true,
            log_level: "error".to_string(),
        }
    }

    /// Add one cut: `[start, end)` in seconds into `output`.
    pub fn cut(mut self, start_secs: f64, end_secs: f64, output: impl AsRef<Path>) -> Self {
        self.cuts.push(CutArgs {
            start_secs,
            end_secs,
            output: output.as_ref().to_path_buf(),
        });
        self
    }

    /// Boost or attenuate audio on every output.
    pub fn audio_volume(mut self, multiplier: f64) -> Self {
        self.audio_volume = Some(multiplier);
        self
    }

    /// Set log level.
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Number of cuts in this invocation.
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// Build the command arguments.
    pub fn build_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if self.overwrite {
            args.push("-y".to_string());
        }

        args.push("-v".to_string());
        args.push(self.log_level.clone());

        args.push("-i".to_string());
        args.push(self.input.to_string_lossy().to_string());

        for cut in &self.cuts {
            args.push("-ss".to_string());
            args.push(format!("{:.3}", cut.start_secs));
            args.push("-to".to_string());
            args.push(format!("{:.3}", cut.end_secs));

            if let Some(volume) = self.audio_volume {
                args.push("-filter:a".to_string());
                args.push(format!("volume={}", volume));
            }

            args.push(cut.output.to_string_lossy().to_string());
        }

        args
    }
}

/// Runner for FFmpeg commands.
///
/// Output streams are captured but not parsed; success is inferred from
/// the exit status alone.
#[derive(Debug, Default)]
pub struct FfmpegRunner {
    /// Timeout in seconds
    timeout_secs: Option<u64>,
}

impl FfmpegRunner {
    /// Create a new runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Run a trim command, blocking until the process exits.
    pub async fn run(&self, cmd: &TrimCommand) -> MediaResult<()> {
        check_ffmpeg()?;

        let args = cmd.build_args();
        debug!("Running FFmpeg: ffmpeg {}", args.join(" "));

        let output_future = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output();

        let output = match self.timeout_secs {
            Some(secs) => tokio::time::timeout(Duration::from_secs(secs), output_future)
                .await
                .map_err(|_| MediaError::Timeout(secs))??,
            None => output_future.await?,
        };

        if output.status.success() {
            Ok(())
        } else {
            Err(MediaError::ffmpeg_failed(
                "FFmpeg exited with non-zero status",
                Some(String::from_utf8_lossy(&output.stderr).to_string()),
                output.status.code(),
            ))
        }
    }
}

/// Check if FFmpeg is available.
pub fn check_ffmpeg() -> MediaResult<PathBuf> {
    which::which("ffmpeg").map_err(|_| MediaError::FfmpegNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_builder() {
        let cmd = TrimCommand::new("movie.mp4")
            .audio_volume(1.5)
            .cut(5.0, 10.0, "a.mp4")
            .cut(12.5, 20.0, "b.mp4");

        let args = cmd.build_args();
        assert_eq!(
            args,
            vec![
                "-y", "-v", "error", "-i", "movie.mp4", "-ss", "5.000", "-to", "10.000",
                "-filter:a", "volume=1.5", "a.mp4", "-ss", "12.500", "-to", "20.000",
                "-filter:a", "volume=1.5", "b.mp4",
            ]
        );
    }

    #[test]
    fn test_command_builder_without_volume() {
        let args = TrimCommand::new("movie.mkv").cut(0.0, 1.0, "out.mkv").build_args();

        assert!(!args.contains(&"-filter:a".to_string()));
        assert!(args.contains(&"out.mkv".to_string()));
    }

    #[test]
    fn test_single_input_per_invocation() {
        let args = TrimCommand::new("movie.mp4")
            .cut(0.0, 1.0, "a.mp4")
            .cut(1.0, 2.0, "b.mp4")
            .cut(2.0, 3.0, "c.mp4")
            .build_args();

        assert_eq!(args.iter().filter(|a| *a == "-i").count(), 1);
        assert_eq!(args.iter().filter(|a| *a == "-ss").count(), 3);
    }
}
