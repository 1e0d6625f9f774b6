//! hl7view - Inspect HL7 v2 messages and their embedded PDFs
//!
//! Lists the segments of a message, or shows the labelled fields of one
//! segment and pages through the PDF it carries.

mod render;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use hl7lens_core::codec;
use hl7lens_core::pdf::PdfPayload;
use hl7lens_core::viewer::{Fallback, PdfViewer, ViewMode, ViewerState};
use hl7lens_core::{SegmentDetails, SegmentSummary, ViewerApp, ViewerOptions, Viewport};
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::Level;

use render::LopdfRenderer;

/// Display mode for the embedded PDF.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum ModeArg {
    /// Fit the page to the viewport width (default)
    #[default]
    PageWidth,
    /// Fit the whole page into the viewport
    FullPage,
}

impl From<ModeArg> for ViewMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::PageWidth => ViewMode::PageWidth,
            ModeArg::FullPage => ViewMode::FullPage,
        }
    }
}

/// Inspect an HL7 v2 message and the PDF documents embedded in it.
#[derive(Parser, Debug)]
#[command(name = "hl7view")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the message file, or "-" for stdin
    file: PathBuf,

    /// Segment to show (1-indexed); lists all segments when omitted
    #[arg(short = 's', long)]
    segment: Option<usize>,

    /// Page of the embedded PDF to show (1-indexed)
    #[arg(short = 'p', long, default_value = "1")]
    page: u32,

    /// Display mode for the embedded PDF
    #[arg(short = 'm', long, value_enum, default_value = "page-width")]
    mode: ModeArg,

    /// Viewport width in pixels
    #[arg(long, default_value = "800")]
    width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value = "600")]
    height: f64,

    /// Number of characters shown per segment in the listing
    #[arg(long = "preview-width", default_value = "80")]
    preview_width: usize,

    /// Write the decoded PDF of the selected segment to this path
    #[arg(short = 'x', long = "extract")]
    extract: Option<PathBuf>,

    /// Print the PDF of the selected segment as a data URI
    #[arg(long = "data-uri", action = ArgAction::SetTrue)]
    data_uri: bool,

    /// Print JSON instead of text
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

impl Args {
    fn options(&self) -> ViewerOptions {
        ViewerOptions {
            viewport: Viewport::new(self.width, self.height),
            preview_width: self.preview_width,
            ..ViewerOptions::default()
        }
    }
}

// === JSON reports ===

#[derive(Debug, Serialize)]
struct SummaryReport<'a> {
    index: usize,
    segment_type: &'a str,
    preview: &'a str,
    has_pdf: bool,
}

impl<'a> From<&'a SegmentSummary> for SummaryReport<'a> {
    fn from(summary: &'a SegmentSummary) -> Self {
        Self {
            index: summary.index + 1,
            segment_type: &summary.segment_type,
            preview: &summary.preview,
            has_pdf: summary.has_pdf,
        }
    }
}

#[derive(Debug, Serialize)]
struct FieldReport<'a> {
    index: usize,
    label: &'a str,
    value: &'a str,
    masked: bool,
}

#[derive(Debug, Serialize)]
struct FallbackReport<'a> {
    download_name: &'a str,
    retry: bool,
}

#[derive(Debug, Default, Serialize)]
struct PdfReport<'a> {
    source_field_index: usize,
    state: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bitmap: Option<[u32; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    fallback: Option<FallbackReport<'a>>,
}

#[derive(Debug, Serialize)]
struct SegmentReport<'a> {
    index: usize,
    segment_type: &'a str,
    fields: Vec<FieldReport<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pdf: Option<PdfReport<'a>>,
}

fn pdf_report<'a>(
    payload: &PdfPayload,
    viewer: &PdfViewer,
    fallback: Option<&'a Fallback>,
) -> PdfReport<'a> {
    let mut report = PdfReport {
        source_field_index: payload.source_field_index,
        page: viewer.current_page(),
        total_pages: viewer.total_pages(),
        mode: viewer.mode().map(ViewMode::label),
        bitmap: viewer
            .displayed()
            .map(|shown| [shown.bitmap.width, shown.bitmap.height]),
        fallback: fallback.map(|fallback| FallbackReport {
            download_name: fallback.download_name,
            retry: fallback.retry,
        }),
        ..PdfReport::default()
    };
    match viewer.state() {
        ViewerState::Idle => report.state = "idle",
        ViewerState::Loading => report.state = "loading",
        ViewerState::Ready { .. } => {
            report.state = "ready";
            report.error = viewer.page_error().map(|(_, message)| message.to_string());
        }
        ViewerState::Failed(failure) => {
            report.state = failure.kind.as_str();
            report.error = Some(failure.message.clone());
        }
    }
    report
}

// === Commands ===

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return io::read_to_string(io::stdin()).context("failed to read message from stdin");
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn list_segments<W: Write>(out: &mut W, app: &ViewerApp, json: bool) -> Result<()> {
    let summaries = app.summaries();
    if json {
        let report: Vec<SummaryReport<'_>> = summaries.iter().map(SummaryReport::from).collect();
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    if summaries.is_empty() {
        writeln!(out, "No segments found")?;
        return Ok(());
    }
    let width = summaries.len().to_string().len();
    for summary in &summaries {
        let badge = if summary.has_pdf { " [PDF]" } else { "" };
        writeln!(
            out,
            "{:>width$}  {}{}",
            summary.index + 1,
            summary.preview,
            badge
        )?;
    }
    Ok(())
}

/// Open the selected segment's payload, then move to the requested page and
/// mode.
fn view_pdf(app: &mut ViewerApp, index: usize, args: &Args) -> Result<()> {
    let Some(request) = app.select_segment(index)? else {
        return Ok(());
    };
    let mut renderer = LopdfRenderer::new(app.options().clone());
    let mut session = app.session(&mut renderer);
    session.load(request);
    session.go_to_page(args.page);
    session.set_mode(args.mode.into());
    Ok(())
}

fn write_fields<W: Write>(out: &mut W, number: usize, details: &SegmentDetails) -> Result<()> {
    writeln!(out, "Segment {number}: {}", details.segment_type)?;
    let width = details
        .rows
        .iter()
        .map(|row| row.label.chars().count())
        .max()
        .unwrap_or(0);
    for row in &details.rows {
        writeln!(out, "  {:<width$}  {}", row.label, row.value)?;
    }
    Ok(())
}

fn write_pdf<W: Write>(out: &mut W, report: &PdfReport<'_>) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "PDF in field {}", report.source_field_index)?;
    if let (Some(page), Some(total), Some(mode)) = (report.page, report.total_pages, report.mode) {
        match report.bitmap {
            Some([w, h]) => writeln!(out, "  Page {page} / {total} ({mode}), {w}x{h} px")?,
            None => writeln!(out, "  Page {page} / {total} ({mode})")?,
        }
        if let Some(error) = &report.error {
            writeln!(out, "  {error}")?;
        }
        return Ok(());
    }

    writeln!(out, "  Unable to display PDF ({})", report.state)?;
    if let Some(error) = &report.error {
        writeln!(out, "  {error}")?;
    }
    if let Some(fallback) = &report.fallback {
        writeln!(out, "  Save as {} with --extract", fallback.download_name)?;
        writeln!(out, "  Open in a browser with --data-uri")?;
        if fallback.retry {
            writeln!(out, "  Retry once a PDF renderer is available")?;
        }
    }
    Ok(())
}

fn show_segment<W: Write>(
    out: &mut W,
    app: &mut ViewerApp,
    number: usize,
    args: &Args,
) -> Result<()> {
    let Some(index) = number.checked_sub(1) else {
        bail!("segment numbers start at 1");
    };
    let details = app.details(index)?;

    if let Some(payload) = &details.payload {
        if let Some(path) = &args.extract {
            let bytes = codec::decode(&payload.base64)?;
            fs::write(path, &bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = bytes.len(), "extracted PDF");
        }
        if args.data_uri {
            writeln!(out, "{}", codec::pdf_data_uri(&payload.base64))?;
            return Ok(());
        }
    } else if args.extract.is_some() || args.data_uri {
        bail!("segment {number} carries no PDF");
    }

    view_pdf(app, index, args)?;
    let fallback = app.viewer().fallback();
    let pdf = details
        .payload
        .as_ref()
        .map(|payload| pdf_report(payload, app.viewer(), fallback.as_ref()));

    if args.json {
        let report = SegmentReport {
            index: number,
            segment_type: &details.segment_type,
            fields: details
                .rows
                .iter()
                .map(|row| FieldReport {
                    index: row.index,
                    label: &row.label,
                    value: &row.value,
                    masked: row.masked,
                })
                .collect(),
            pdf,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    write_fields(out, number, &details)?;
    if let Some(pdf) = &pdf {
        write_pdf(out, pdf)?;
    }
    Ok(())
}

fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    let text = read_input(&args.file)?;
    let mut app = ViewerApp::new(args.options());
    app.load_message(&text);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match args.segment {
        None => list_segments(&mut out, &app, args.json)?,
        Some(number) => show_segment(&mut out, &mut app, number, &args)?,
    }
    out.flush()?;

    Ok(())
}
