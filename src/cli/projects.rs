use folio::profile;
use itertools::Itertools;
use tabled::settings::{
    Color, Width,
    measurement::Percent,
    object::{Columns, Object, Rows},
    peaker::Priority,
};

#[derive(clap::Args)]
pub struct ProjectsCommand;

impl ProjectsCommand {
    pub async fn exec(&self) {
        let mut table_data: Vec<Vec<String>> = vec![vec![
            "Title".to_string(),
            "Kind".to_string(),
            "Stack".to_string(),
            "URL".to_string(),
            "Gallery".to_string(),
            "Description".to_string(),
        ]];

        for project in profile::projects() {
            table_data.push(vec![
                if project.featured {
                    format!("{} ★", project.title)
                } else {
                    project.title
                },
                project.kind.to_string(),
                project.tags.iter().join(", "),
                project.url.unwrap_or("-".to_string()),
                format!("{} images", project.gallery.len()),
                project.description,
            ]);
        }

        let mut table = tabled::builder::Builder::from_iter(&table_data).build();
        table.modify(Rows::first(), Color::FG_BRIGHT_BLACK);
        table.modify(Columns::first().not(Rows::first()), Color::FG_CYAN);
        table.with(Width::wrap(Percent(100)).priority(Priority::max(true)));
        println!("{table}");
    }
}
