//! Tests for the PDF viewer state machine and its synchronous session.

mod common;

use common::{FakeRenderer, PDF_HEADER_B64};
use hl7lens_core::pdf::PdfPayload;
use hl7lens_core::viewer::{
    Bitmap, FailureKind, PdfViewer, RenderOutcome, ViewMode, ViewerSession, ViewerState,
};
use hl7lens_core::Viewport;

fn payload() -> PdfPayload {
    PdfPayload::new(5, PDF_HEADER_B64)
}

fn failure_kind(viewer: &PdfViewer) -> Option<FailureKind> {
    match viewer.state() {
        ViewerState::Failed(failure) => Some(failure.kind),
        _ => None,
    }
}

// === navigation ===

#[test]
fn test_open_lands_on_first_page_in_page_width() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::with_pages(5);
    let mut session = ViewerSession::new(&mut viewer, &mut renderer);

    let outcome = session.open(payload()).expect("rendered");
    assert!(matches!(outcome, RenderOutcome::Displayed(page) if page.page == 1));
    assert_eq!(
        session.state(),
        &ViewerState::Ready {
            current_page: 1,
            total_pages: 5,
            mode: ViewMode::PageWidth
        }
    );
    assert_eq!(renderer.loaded, vec![b"%PDF-1.4\n".to_vec()]);
}

#[test]
fn test_next_page_from_three_of_five() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::with_pages(5);
    let mut session = ViewerSession::new(&mut viewer, &mut renderer);
    session.open(payload());
    session.go_to_page(3);
    assert_eq!(session.viewer().current_page(), Some(3));

    session.next_page();
    assert_eq!(
        session.state(),
        &ViewerState::Ready {
            current_page: 4,
            total_pages: 5,
            mode: ViewMode::PageWidth
        }
    );
}

#[test]
fn test_next_page_on_last_page_is_noop() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::with_pages(5);
    {
        let mut session = ViewerSession::new(&mut viewer, &mut renderer);
        session.open(payload());
        session.go_to_page(5);
        assert!(session.next_page().is_none());
    }
    assert_eq!(viewer.current_page(), Some(5));
    assert!(!viewer.can_go_next());
    assert_eq!(renderer.renders.len(), 2);
}

#[test]
fn test_prev_page_on_first_page_is_noop() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::with_pages(2);
    let mut session = ViewerSession::new(&mut viewer, &mut renderer);
    session.open(payload());
    assert!(session.prev_page().is_none());
    assert_eq!(session.viewer().current_page(), Some(1));
}

#[test]
fn test_go_to_page_clamps() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::with_pages(3);
    let mut session = ViewerSession::new(&mut viewer, &mut renderer);
    session.open(payload());
    session.go_to_page(40);
    assert_eq!(session.viewer().current_page(), Some(3));
    session.go_to_page(0);
    assert_eq!(session.viewer().current_page(), Some(1));
}

#[test]
fn test_go_to_page_renders_only_target() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::with_pages(50);
    {
        let mut session = ViewerSession::new(&mut viewer, &mut renderer);
        session.open(payload());
        let outcome = session.go_to_page(40).expect("rendered");
        assert!(matches!(outcome, RenderOutcome::Displayed(page) if page.page == 40));
        assert!(session.go_to_page(40).is_none());
    }
    let pages: Vec<u32> = renderer.renders.iter().map(|(page, _, _)| *page).collect();
    assert_eq!(pages, vec![1, 40]);
    assert_eq!(
        viewer.page_indicator().as_deref(),
        Some("Page 40 / 50 (Page Width)")
    );
}

// === mode ===

#[test]
fn test_set_same_mode_does_not_render() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::with_pages(2);
    {
        let mut session = ViewerSession::new(&mut viewer, &mut renderer);
        session.open(payload());
        assert!(session.set_mode(ViewMode::PageWidth).is_none());
    }
    assert_eq!(renderer.renders.len(), 1);
}

#[test]
fn test_set_mode_rerenders_same_page() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::with_pages(4);
    {
        let mut session = ViewerSession::new(&mut viewer, &mut renderer);
        session.open(payload());
        session.next_page();
        session.set_mode(ViewMode::FullPage);
    }
    assert_eq!(viewer.mode(), Some(ViewMode::FullPage));
    assert_eq!(viewer.current_page(), Some(2));
    assert_eq!(
        renderer.renders.last().map(|(page, mode, _)| (*page, *mode)),
        Some((2, ViewMode::FullPage))
    );
    assert_eq!(
        viewer.page_indicator().as_deref(),
        Some("Page 2 / 4 (Full Page)")
    );
}

// === failures ===

#[test]
fn test_renderer_unavailable() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::unavailable();
    ViewerSession::new(&mut viewer, &mut renderer).open(payload());

    assert_eq!(failure_kind(&viewer), Some(FailureKind::RendererUnavailable));
    assert!(renderer.loaded.is_empty());

    let fallback = viewer.fallback().expect("fallback");
    assert!(fallback.retry);
    assert_eq!(fallback.download_name, "document.pdf");
    assert_eq!(
        fallback.open_uri,
        format!("data:application/pdf;base64,{PDF_HEADER_B64}")
    );
    assert_eq!(fallback.download_uri, fallback.open_uri);
}

#[test]
fn test_decode_error() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::with_pages(1);
    ViewerSession::new(&mut viewer, &mut renderer).open(PdfPayload::new(3, "JVBERi0xL*"));

    assert_eq!(failure_kind(&viewer), Some(FailureKind::DecodeError));
    assert!(renderer.loaded.is_empty());
    assert!(!viewer.fallback().expect("fallback").retry);
}

#[test]
fn test_load_error() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::with_pages(1);
    renderer.pages = Err("no trailer".to_string());
    ViewerSession::new(&mut viewer, &mut renderer).open(payload());

    match viewer.state() {
        ViewerState::Failed(failure) => {
            assert_eq!(failure.kind, FailureKind::LoadError);
            assert!(failure.message.contains("no trailer"), "{}", failure.message);
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[test]
fn test_retry_reuses_retained_payload() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::unavailable();
    ViewerSession::new(&mut viewer, &mut renderer).open(payload());
    assert_eq!(failure_kind(&viewer), Some(FailureKind::RendererUnavailable));

    renderer.available = true;
    renderer.pages = Ok(2);
    let outcome = ViewerSession::new(&mut viewer, &mut renderer).retry();

    assert!(matches!(outcome, Some(RenderOutcome::Displayed(_))));
    assert_eq!(viewer.total_pages(), Some(2));
    assert_eq!(viewer.payload(), Some(&payload()));
    assert_eq!(renderer.loaded, vec![b"%PDF-1.4\n".to_vec()]);
}

#[test]
fn test_retry_can_fail_again() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::unavailable();
    let mut session = ViewerSession::new(&mut viewer, &mut renderer);
    session.open(payload());
    assert!(session.retry().is_none());
    assert!(matches!(session.state(), ViewerState::Failed(_)));
}

#[test]
fn test_retry_only_from_failed() {
    let mut viewer = PdfViewer::default();
    assert!(viewer.retry().is_none());
    let mut renderer = FakeRenderer::with_pages(1);
    ViewerSession::new(&mut viewer, &mut renderer).open(payload());
    assert!(viewer.retry().is_none());
    assert!(viewer.fallback().is_none());
}

#[test]
fn test_page_render_failure_keeps_document() {
    let mut viewer = PdfViewer::default();
    let mut renderer = FakeRenderer::with_pages(3);
    renderer.fail_page = Some(2);
    let mut session = ViewerSession::new(&mut viewer, &mut renderer);
    session.open(payload());

    let outcome = session.next_page().expect("render attempted");
    assert!(matches!(outcome, RenderOutcome::PageFailed { page: 2, .. }));
    assert_eq!(session.viewer().current_page(), Some(2));
    assert!(session.viewer().page_error().is_some());

    session.next_page();
    assert_eq!(session.viewer().current_page(), Some(3));
    assert!(session.viewer().page_error().is_none());
    assert_eq!(session.viewer().displayed().map(|page| page.page), Some(3));
}

// === stale completions ===

#[test]
fn test_superseded_render_is_stale() {
    let mut viewer = PdfViewer::default();
    let load = viewer.select(payload());
    viewer.begin_load(load, true).expect("decoded");
    let first = viewer.finish_load(load, Ok(3)).expect("first page");
    let second = viewer.next_page().expect("second page");

    let bitmap = Bitmap {
        width: 800,
        height: 1035,
    };
    assert_eq!(viewer.finish_render(first, Ok(bitmap)), RenderOutcome::Stale);
    assert!(viewer.displayed().is_none());
    assert!(matches!(
        viewer.finish_render(second, Ok(bitmap)),
        RenderOutcome::Displayed(page) if page.page == 2
    ));
}

#[test]
fn test_render_after_new_selection_is_stale() {
    let mut viewer = PdfViewer::default();
    let load = viewer.select(payload());
    viewer.begin_load(load, true).expect("decoded");
    let render = viewer.finish_load(load, Ok(1)).expect("first page");

    let other = viewer.select(PdfPayload::new(2, "JVBERi0xLjcK"));
    let bitmap = Bitmap {
        width: 1,
        height: 1,
    };
    assert_eq!(viewer.finish_render(render, Ok(bitmap)), RenderOutcome::Stale);
    assert!(viewer.finish_load(load, Ok(4)).is_none());
    assert_eq!(viewer.state(), &ViewerState::Loading);
    assert!(viewer.begin_load(other, true).is_some());
}

#[test]
fn test_resize_rerenders_with_new_viewport() {
    let mut viewer = PdfViewer::new(Viewport::new(1024.0, 768.0));
    let mut renderer = FakeRenderer::with_pages(2);
    {
        let mut session = ViewerSession::new(&mut viewer, &mut renderer);
        session.open(payload());
        session.resize(Viewport::new(640.0, 480.0));
    }
    let viewports: Vec<f64> = renderer.renders.iter().map(|(_, _, v)| v.width).collect();
    assert_eq!(viewports, vec![1024.0, 640.0]);
    assert_eq!(viewer.current_page(), Some(1));
}
