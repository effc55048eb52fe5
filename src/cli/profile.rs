use folio::profile;
use tabled::settings::{
    Color, Width,
    measurement::Percent,
    object::Columns,
    peaker::Priority,
};

#[derive(clap::Args)]
pub struct ProfileCommand;

impl ProfileCommand {
    pub async fn exec(&self) {
        let profile = profile::profile();

        let table_data: Vec<Vec<String>> = vec![
            vec!["name".to_string(), profile.name],
            vec!["headline".to_string(), profile.headline],
            vec!["summary".to_string(), profile.summary],
            vec!["about".to_string(), profile.about],
            vec!["nationality".to_string(), profile.nationality],
            vec!["experience".to_string(), profile.experience_years],
            vec!["location".to_string(), profile.location],
            vec!["availability".to_string(), profile.availability],
            vec!["email".to_string(), profile.email],
            vec!["github".to_string(), profile.github_url],
            vec!["linkedin".to_string(), profile.linkedin_url],
            vec!["resume".to_string(), profile.resume_path],
        ];

        let mut table = tabled::builder::Builder::from_iter(&table_data).build();
        table.modify(Columns::first(), Color::FG_CYAN);
        table.with(Width::wrap(Percent(100)).priority(Priority::max(true)));
        println!("{table}");

        let mut skills_data: Vec<Vec<String>> = vec![];
        for group in profile::skills() {
            skills_data.push(vec![group.title, group.stack]);
        }

        let mut skills_table = tabled::builder::Builder::from_iter(&skills_data).build();
        skills_table.modify(Columns::first(), Color::FG_CYAN);
        skills_table.with(Width::wrap(Percent(100)).priority(Priority::max(true)));
        println!("{skills_table}");
    }
}
