use crate::ui::app::{App, Screen};
use crate::ui::auth::render_auth;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::registration::render_registration;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.screen(), app.is_busy(), app.tick());
    frame.render_widget(header_widget.widget(), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Auth => render_auth(frame, body, app.auth()),
        Screen::Registration => render_registration(frame, body, app.registration()),
    }
    let footer_widget = Footer::new(app.screen());
    frame.render_widget(footer_widget.widget(footer), footer);
}
