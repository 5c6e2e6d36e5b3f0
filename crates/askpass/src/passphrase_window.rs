//! egui rendering of the passphrase dialog
//!
//! Widgets edit scratch strings; every change is forwarded to the controller
//! as a field notification, and text typed into a focused field is forwarded
//! as a key press for Caps Lock detection.

use std::sync::Arc;

use askpass_dialog_adapters::InMemoryWallet;
use askpass_dialog_core::{
    Answer, DialogConfig, DialogOutcome, FieldId, InputEvent, KeyPress, ModalKind, Mode,
    PassphraseDialog,
};
use eframe::egui;
use zeroize::Zeroizing;

use crate::ui;

pub struct PassphraseWindow {
    dialog: PassphraseDialog<Arc<InMemoryWallet>>,
    scratch: [Zeroizing<String>; 3],
}

impl PassphraseWindow {
    pub fn open(mode: Mode, wallet: Arc<InMemoryWallet>, config: DialogConfig) -> Self {
        let capacity = config.passphrase_limit() * 4;
        let mut dialog = PassphraseDialog::new(mode, Some(wallet), config);
        dialog.subscribe(|signal| tracing::debug!(?signal, "dialog signal"));
        Self {
            dialog,
            scratch: std::array::from_fn(|_| Zeroizing::new(String::with_capacity(capacity))),
        }
    }

    pub fn mode(&self) -> Mode {
        self.dialog.mode()
    }

    pub fn outcome(&self) -> Option<DialogOutcome> {
        self.dialog.outcome()
    }

    pub fn shutdown_requested(&self) -> bool {
        self.dialog.shutdown_requested()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let layout = self.dialog.layout().clone();
        let max_chars = self.dialog.config().passphrase_limit();
        let modal_open = self.dialog.modal().is_some();
        let mut window_open = true;

        egui::Window::new(layout.title)
            .id(egui::Id::new("passphrase_dialog"))
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(420.0);
                ui.add_enabled_ui(!modal_open, |ui| {
                    ui.label(layout.instructions);
                    ui.add_space(10.0);

                    egui::Grid::new("passphrase_fields")
                        .num_columns(2)
                        .spacing([12.0, 6.0])
                        .show(ui, |ui| {
                            for &field in layout.fields {
                                ui.label(field.label());
                                self.field_edit(ui, field, max_chars);
                                ui.end_row();
                            }
                        });

                    if let Some(warning) = self.dialog.caps_lock_warning() {
                        ui.add_space(4.0);
                        ui.colored_label(ui::DANGER, warning);
                    }

                    if layout.anonymize_visible {
                        let mut checked = self.dialog.anonymize_only();
                        if ui
                            .checkbox(&mut checked, "For anonymization and staking only")
                            .changed()
                        {
                            self.dialog.handle(InputEvent::AnonymizeToggled(checked));
                        }
                    }

                    ui.add_space(10.0);
                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui
                            .add_enabled(self.dialog.confirm_enabled(), egui::Button::new("OK"))
                            .clicked()
                        {
                            self.dialog.handle(InputEvent::Confirm);
                        }
                        if ui.button("Cancel").clicked() {
                            self.dialog.handle(InputEvent::Cancel);
                        }
                    });
                });
            });

        if !window_open {
            self.dialog.handle(InputEvent::Cancel);
        }

        self.show_notice(ctx);
    }

    fn field_edit(&mut self, ui: &mut egui::Ui, field: FieldId, max_chars: usize) {
        let buffer = &mut self.scratch[field.index()];
        let response = ui.add(
            egui::TextEdit::singleline(&mut **buffer)
                .password(true)
                .char_limit(max_chars)
                .desired_width(260.0),
        );

        if response.has_focus() {
            let presses: Vec<KeyPress> = ui.input(|i| {
                i.events
                    .iter()
                    .filter_map(|event| match event {
                        egui::Event::Text(text) => Some(KeyPress::new(text.clone(), i.modifiers.shift)),
                        _ => None,
                    })
                    .collect()
            });
            for key in presses {
                self.dialog.handle(InputEvent::KeyPressed { field, key });
            }
        }

        if response.changed() {
            self.dialog.handle(InputEvent::FieldEdited {
                field,
                text: buffer.as_str(),
            });
        }
    }

    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.dialog.modal().cloned() else {
            return;
        };

        egui::Window::new(notice.title.as_str())
            .id(egui::Id::new("passphrase_notice"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_max_width(440.0);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(ui::notice_icon(notice.kind))
                            .size(20.0)
                            .color(ui::notice_color(notice.kind)),
                    );
                    ui.label(notice.body.as_str());
                });
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if notice.kind == ModalKind::Question {
                        if ui.button("Yes").clicked() {
                            self.dialog.handle(InputEvent::Answer(Answer::Yes));
                        }
                        if ui.button("Cancel").clicked() {
                            self.dialog.handle(InputEvent::Answer(Answer::Cancel));
                        }
                    } else if ui.button("OK").clicked() {
                        self.dialog.handle(InputEvent::DismissNotice);
                    }
                });
            });
    }
}
