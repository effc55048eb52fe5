use eframe::egui;
use folio::{
    VERSION,
    gui::{self, Section, portfolio_viewer::PortfolioViewer},
    profile,
};

#[derive(clap::Args)]
pub struct ShowCommand {
    #[arg(
        short = 'p',
        long = "page",
        default_value = "home",
        value_parser = gui::section_from_str,
        help = "Section to open: home, about, experience, projects, contact or dividends"
    )]
    page: Section,
}

impl ShowCommand {
    pub async fn exec(&self) {
        let profile = profile::profile();

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
            ..Default::default()
        };

        let page = self.page;
        let _ = eframe::run_native(
            &format!("{} Portfolio {VERSION}", profile.name),
            options,
            Box::new(move |cc| Ok(Box::new(PortfolioViewer::new(cc, page)))),
        );
    }
}
