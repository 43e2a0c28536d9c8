use projektor_api::{ApiUrl, BearerToken, ProjektorClient};
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::from_filename("./projektor-api/.env.local").ok();

    let client = ProjektorClient::new(ApiUrl::from_env(), BearerToken::from_env()?);

    let projects = client.fetch_all_projects().await?;

    println!("{} projects:", projects.len());
    for project in projects {
        println!(
            "{} | {} | {} - {} | running: {}",
            project.project_name,
            project.manager_name,
            project.start_date,
            project.end_date,
            project.is_running
        );
    }

    Ok(())
}
