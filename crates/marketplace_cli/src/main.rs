//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `marketplace_core` linkage.
//! - Seed an in-memory store with sample records and walk the full
//!   mutate -> refresh cycle once.
//! - Keep output deterministic for quick local sanity checks.

use marketplace_core::{
    core_version, FreelancerDraft, MarketplaceService, ProjectDraft, SqliteMarketplaceRepository,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("marketplace_cli error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    println!("marketplace_core version={}", core_version());

    let repo = SqliteMarketplaceRepository::in_memory()?;
    let mut service = MarketplaceService::new(repo);

    for draft in sample_freelancers() {
        service.register_freelancer(draft)?;
    }
    for draft in sample_projects() {
        service.post_project(draft)?;
    }

    println!("freelancers:");
    for freelancer in service.freelancers() {
        println!("  {freelancer} -> {}", freelancer.detail_line());
    }
    println!("projects:");
    for project in service.projects() {
        println!("  {project} -> {}", project.detail_line());
    }

    let first_id = service.freelancers().first().map(|f| f.id);
    if let Some(id) = first_id {
        service.remove_freelancer(id)?;
    }

    println!(
        "after removal: {} freelancers, {} projects",
        service.freelancers().len(),
        service.projects().len()
    );

    Ok(())
}

fn sample_freelancers() -> Vec<FreelancerDraft> {
    vec![
        FreelancerDraft::new("Budi Setiawan", "Programmer Java", 50.0, 4.8),
        FreelancerDraft::new("Ani Lestari", "Desainer UI/UX", 45.0, 4.9),
        FreelancerDraft::new("Rahmat Hidayat", "Penulis Konten", 30.0, 4.5),
    ]
}

fn sample_projects() -> Vec<ProjectDraft> {
    vec![
        ProjectDraft::new(
            "Sistem E-Commerce",
            "Membutuhkan pengembangan toko online lengkap.",
            5000.0,
            "Toko Maju Jaya",
        ),
        ProjectDraft::new(
            "Desain Logo",
            "Logo modern untuk startup teknologi.",
            500.0,
            "MulaiApps",
        ),
    ]
}
