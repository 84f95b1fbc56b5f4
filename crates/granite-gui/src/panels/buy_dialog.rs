use crate::app::GraniteApp;

/// Confirmation window for a pending buy request.
pub fn show(ctx: &egui::Context, app: &mut GraniteApp) {
    let Some(id) = app.ui_state.pending_buy.clone() else {
        return;
    };
    let Some(material) = app.materials.iter().find(|m| m.id == id) else {
        // Listing vanished (deleted or reloaded) while the dialog was open.
        app.ui_state.pending_buy = None;
        return;
    };

    let buyer = app.user.buyer_profile();
    let mut confirm = false;
    let mut cancel = false;

    egui::Window::new("Confirm Buy Request")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("You are about to send a buy request for:");
            ui.add_space(4.0);
            ui.heading(&material.factory_name);
            ui.label(format!(
                "{}{:.2} / sqft",
                app.config.currency_symbol, material.rate
            ));
            ui.add_space(8.0);
            ui.label(format!("Buyer: {}", buyer.contact_name()));
            ui.label(format!("Email: {}", buyer.email));
            if let Some(phone) = &buyer.phone {
                ui.label(format!("Phone: {phone}"));
            }
            ui.add_space(8.0);
            ui.small("The request opens in WhatsApp; send it from there.");
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Send Request").clicked() {
                    confirm = true;
                }
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
            });
        });

    if confirm {
        app.confirm_buy(ctx);
    } else if cancel {
        app.ui_state.pending_buy = None;
    }
}
