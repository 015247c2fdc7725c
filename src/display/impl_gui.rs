use crate::display::interface::{DisplayState, LabelDisplay};
use eframe::egui;
use std::error::Error;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Clone)]
struct ResultWindow {
    state: Arc<Mutex<DisplayState>>,
}

impl eframe::App for ResultWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = match self.state.lock() {
            Ok(state) => state.clone(),
            Err(_) => return,
        };

        let color = match state {
            DisplayState::Failed(_) => egui::Color32::from_rgb(200, 40, 40),
            _ => egui::Color32::BLACK,
        };

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.label(egui::RichText::new(state.text()).color(color).size(28.0));
            });
        });

        ctx.request_repaint_after(Duration::from_millis(200));
    }
}

/// Shows the current result in a small native window.
pub struct LabelDisplayGui {
    state: Arc<Mutex<DisplayState>>,
}

impl LabelDisplayGui {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(DisplayState::Idle)),
        }
    }
}

/// Window options. The event loop is allowed to run off the main thread.
fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 160.0])
            .with_resizable(false),
        event_loop_builder: Some(Box::new(
            |_builder: &mut eframe::EventLoopBuilder<eframe::UserEvent>| {
                #[cfg(target_os = "linux")]
                {
                    use winit::platform::wayland::EventLoopBuilderExtWayland;
                    use winit::platform::x11::EventLoopBuilderExtX11;
                    EventLoopBuilderExtX11::with_any_thread(_builder, true);
                    EventLoopBuilderExtWayland::with_any_thread(_builder, true);
                }
                #[cfg(target_os = "windows")]
                {
                    use winit::platform::windows::EventLoopBuilderExtWindows;
                    _builder.with_any_thread(true);
                }
            },
        )),
        ..Default::default()
    }
}

/// Blocks until the window thread reports that the window opened.
fn wait_until_open(
    opened: &Receiver<Result<(), String>>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    match opened.recv() {
        Ok(Ok(())) => Ok(()),
        Ok(Err(reason)) => Err(format!("display window failed to start: {}", reason).into()),
        Err(_) => Err("display window thread exited before the window opened".into()),
    }
}

impl LabelDisplay for LabelDisplayGui {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let state = self.state.clone();
        let (opened_tx, opened_rx) = mpsc::channel();

        thread::spawn(move || {
            let window = ResultWindow { state };
            let on_open = opened_tx.clone();

            let result = eframe::run_native(
                "Photo Classifier",
                native_options(),
                Box::new(move |_cc| {
                    let _ = on_open.send(Ok(()));
                    Box::new(window)
                }),
            );

            // Receiver is gone once the window opened.
            if let Err(e) = result {
                let _ = opened_tx.send(Err(e.to_string()));
            }
        });

        wait_until_open(&opened_rx)
    }

    fn show(&mut self, state: &DisplayState) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut current = self.state.lock().map_err(|e| e.to_string())?;
        *current = state.clone();
        Ok(())
    }
}
