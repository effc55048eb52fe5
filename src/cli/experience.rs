use folio::profile;
use itertools::Itertools;
use tabled::settings::{
    Color, Width,
    measurement::Percent,
    object::{Columns, Object, Rows},
    peaker::Priority,
};

#[derive(clap::Args)]
pub struct ExperienceCommand;

impl ExperienceCommand {
    pub async fn exec(&self) {
        let mut table_data: Vec<Vec<String>> = vec![vec![
            "Period".to_string(),
            "Company".to_string(),
            "Location".to_string(),
            "Role".to_string(),
            "Highlights".to_string(),
            "Stack".to_string(),
        ]];

        for experience in profile::experiences() {
            table_data.push(vec![
                experience.period,
                experience.company,
                experience.location,
                experience.role,
                experience
                    .details
                    .iter()
                    .map(|detail| format!("· {detail}"))
                    .join("\n"),
                experience.tags.iter().join(", "),
            ]);
        }

        let mut table = tabled::builder::Builder::from_iter(&table_data).build();
        table.modify(Rows::first(), Color::FG_BRIGHT_BLACK);
        table.modify(Columns::first().not(Rows::first()), Color::FG_CYAN);
        table.with(Width::wrap(Percent(100)).priority(Priority::max(true)));
        println!("{table}");
    }
}
