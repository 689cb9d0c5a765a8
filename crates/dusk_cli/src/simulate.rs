//! `dusk simulate`

use crate::cli::SimulateArgs;
use crate::config::DuskConfig;
use crate::headless::{HeadlessCapture, HeadlessView, LoggingStatusBar};
use anyhow::{Context, Result};
use dusk_paint::{PaintCommand, PaintContext, Size};
use dusk_theme::{initial_theme, FixedPreference};
use dusk_transition::{CompositorRenderer, SharedViewport, ThemeTransition, TransitionError};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// One display refresh at 60Hz
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Outcome of a simulation run
#[derive(Debug, Default, PartialEq)]
pub struct SimulationReport {
    pub completed: u32,
    pub failed: u32,
    pub frames: u32,
}

pub async fn run(args: &SimulateArgs) -> Result<SimulationReport> {
    let config = DuskConfig::load(args.config.as_deref())?;
    let size = config.viewport.size();
    let preference = FixedPreference(args.system);

    let view = Arc::new(HeadlessView::new(size, initial_theme(&preference)));
    let viewport = Arc::new(SharedViewport::new(Some(size)));
    let root = ThemeTransition::builder(
        HeadlessCapture::new(Arc::clone(&view), args.fail_capture),
        viewport,
    )
    .preference(&preference)
    .status_bar(Arc::new(LoggingStatusBar))
    .config(config.transition.clone())
    .build()
    .context("Invalid transition configuration")?;
    let painter = view.spawn_renderer(root.subscribe());

    tracing::info!(
        theme = %root.state().theme(),
        width = size.width,
        height = size.height,
        toggles = args.toggles,
        "starting simulation"
    );

    let mut report = SimulationReport::default();
    let renderer = root.renderer();
    let handle = root.handle();
    let toggles = async {
        for n in 1..=args.toggles {
            match handle.toggle(args.x, args.y).await {
                Ok(theme) => {
                    report.completed += 1;
                    println!("toggle {n}: now {theme}");
                }
                Err(TransitionError::Capture(err)) => {
                    report.failed += 1;
                    println!(
                        "toggle {n}: capture failed ({err}), theme kept at {}",
                        handle.current_theme()
                    );
                }
                Err(err) => return Err(anyhow::Error::new(err).context("Transition failed")),
            }
        }
        Ok::<_, anyhow::Error>(())
    };

    let started = Instant::now();
    let mut frames = 0;
    tokio::select! {
        result = toggles => result?,
        _ = print_frames(&renderer, size, started, &mut frames) => {}
    }
    report.frames = frames;

    drop(root);
    painter.await.context("Headless renderer stopped unexpectedly")?;
    Ok(report)
}

/// Render the overlay once per frame, printing the frames that draw anything
async fn print_frames(
    renderer: &CompositorRenderer,
    viewport: Size,
    started: Instant,
    frames: &mut u32,
) {
    let mut interval = tokio::time::interval(FRAME_INTERVAL);
    loop {
        interval.tick().await;
        let mut ctx = PaintContext::new();
        renderer.render(&mut ctx, viewport);
        if !renderer.is_visible() {
            continue;
        }
        *frames += 1;
        println!(
            "{:>6.1}ms  {}",
            started.elapsed().as_secs_f64() * 1_000.0,
            describe_frame(renderer, &ctx)
        );
    }
}

fn describe_frame(renderer: &CompositorRenderer, ctx: &PaintContext) -> String {
    let layers = ctx
        .commands()
        .iter()
        .map(|command| match command {
            PaintCommand::DrawImage { .. } => "before",
            PaintCommand::FillCircle { .. } => "reveal",
        })
        .collect::<Vec<_>>()
        .join("+");
    match renderer.reveal_radius() {
        Some(radius) => format!("{layers:<14} radius {radius:>8.2}"),
        None => format!("{layers:<14} radius        -"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(toggles: u32, fail_capture: bool) -> SimulateArgs {
        SimulateArgs {
            config: None,
            x: 100.0,
            y: 100.0,
            toggles,
            system: Some(dusk_theme::ThemeName::Dark),
            fail_capture,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulation_runs_all_toggles() {
        let report = run(&args(2, false)).await.unwrap();
        assert_eq!(report.completed, 2);
        assert_eq!(report.failed, 0);
        assert!(report.frames > 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_captures_are_reported() {
        let report = run(&args(3, true)).await.unwrap();
        assert_eq!(report.completed, 0);
        assert_eq!(report.failed, 3);
    }
}
