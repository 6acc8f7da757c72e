//! Standalone demo: opens a window with a vertical seek bar and its value.

use floem::peniko::Color;
use floem::prelude::*;
use floem::window::WindowConfig;
use floem_seekbar::{
    vertical_seek_bar_with, DebugOverlay, RangeConfig, SeekBar, StyleConfig,
};

fn main() {
    let progress = RwSignal::new(30.0);

    let style = StyleConfig::default()
        .with_preferred_touch_area_width(40.0)
        .unwrap()
        .with_debug(DebugOverlay {
            content_area: None,
            touch_area: Some(Color::rgba8(255, 0, 0, 120)),
        });
    let bar = SeekBar::new(style, RangeConfig::default(), progress.get_untracked());

    floem::Application::new()
        .window(
            move |_| {
                h_stack((
                    vertical_seek_bar_with(progress, bar.clone())
                        .style(|s| s.width(80.0).height_full().padding(8.0)),
                    label(move || format!("{:.1}", progress.get())),
                ))
                .style(|s| s.size_full().gap(16.0).padding(16.0))
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((200.0, 420.0))
                    .title("floem-seekbar"),
            ),
        )
        .run();
}
