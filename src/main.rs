//! Demo binary: generates a sample project plan and certificate into
//! `demo-output/`.

use chrono::Utc;
use serde_json::json;
use std::error::Error;
use std::fs;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let out_dir = Path::new("demo-output");
    fs::create_dir_all(out_dir)?;
    let options = folio::GenerationOptions::default();

    let plan_data = json!({
        "title": "Bridge Building Challenge",
        "subject": "Engineering",
        "stage": "Stage 3",
        "description": "Students design, prototype and test a model bridge \
                        that must span 60cm and carry a 1kg load, documenting \
                        their design decisions along the way.",
        "objectives": [
            "Understand how loads distribute through a structure",
            "Iterate on a design using test results",
            "Present an engineering journal to peers",
        ],
        "milestones": [
            {"phase": "Research", "activity": "Study real bridge designs", "duration": "1 week"},
            {"phase": "Design", "activity": "Sketch and select a concept", "duration": "1 week"},
            {"phase": "Build", "activity": "Construct the model", "duration": "2 weeks"},
            {"phase": "Test", "activity": "Load testing and analysis", "duration": "1 week"},
        ],
        "resources": ["Balsa wood", "Hot glue", "Load testing rig"],
        "assessment": "Assessed on design iteration, the final load test, \
                       and the quality of the engineering journal.",
    });
    let plan = folio::generate_project_plan(&plan_data, "Ms. Rivera", &options)?;
    let plan_path = out_dir.join("project-plan.pdf");
    fs::write(&plan_path, &plan)?;
    log::info!("Wrote {} ({} bytes)", plan_path.display(), plan.len());

    let certificate = folio::generate_certificate(
        "Jane Doe",
        "the Bridge Building Challenge",
        Utc::now().date_naive(),
        "Ms. Rivera",
        None,
        &options,
    )?;
    let cert_path = out_dir.join("certificate.pdf");
    fs::write(&cert_path, &certificate)?;
    log::info!("Wrote {} ({} bytes)", cert_path.display(), certificate.len());

    Ok(())
}
