use anyhow::Result;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};

use crate::cli::{Output, Prompt};
use crate::config::Config;
use crate::packages::{find_package_manager, PackageManagerId, PACKAGE_MANAGERS};
use crate::preference::selected_package_manager;

pub async fn get() -> Result<()> {
    let current = selected_package_manager(Config::storage()?).get();
    println!("{}", current);

    if find_package_manager(&current).is_none() {
        Output::error(&format!(
            "'{}' is not a known package manager, commands will be empty",
            current
        ));
    }
    Ok(())
}

pub async fn set(id: PackageManagerId) -> Result<()> {
    selected_package_manager(Config::storage()?).set(id.as_str())?;
    Output::success(&format!("Preferred package manager set to {}", id));
    Ok(())
}

pub async fn select() -> Result<()> {
    let preference = selected_package_manager(Config::storage()?);
    let current = preference.get();

    let labels: Vec<&str> = PACKAGE_MANAGERS.iter().map(|pm| pm.label).collect();
    let default = PACKAGE_MANAGERS
        .iter()
        .position(|pm| pm.id == current)
        .unwrap_or(0);

    let idx = Prompt::select("Preferred package manager:", labels, default)?;
    let chosen = &PACKAGE_MANAGERS[idx];
    preference.set(chosen.id)?;

    Output::success(&format!("Preferred package manager set to {}", chosen.label));
    Ok(())
}

pub async fn list() -> Result<()> {
    let current = selected_package_manager(Config::storage()?).get();

    Output::header("Package managers");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Package manager")
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan),
            Cell::new("Install")
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan),
            Cell::new("Execute")
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan),
            Cell::new("On PATH")
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan),
            Cell::new("").add_attribute(Attribute::Bold).fg(Color::Cyan),
        ]);

    for pm in &PACKAGE_MANAGERS {
        let is_current = pm.id == current;
        let available = pm.is_available();

        table.add_row(vec![
            if is_current {
                Cell::new(pm.label).fg(Color::Green)
            } else {
                Cell::new(pm.label)
            },
            Cell::new(format!("{} {} <pkg>", pm.label, pm.action)),
            Cell::new(format!("{} <pkg>", pm.execute)),
            if available {
                Cell::new("yes").fg(Color::Green)
            } else {
                Cell::new("no").fg(Color::DarkGrey)
            },
            Cell::new(if is_current { "(selected)" } else { "" }).fg(Color::Green),
        ]);
    }

    println!("{table}");
    println!();
    Ok(())
}

pub async fn reset(yes: bool) -> Result<()> {
    if !yes && !Prompt::confirm("Forget the preferred package manager?", false)? {
        Output::info("Cancelled");
        return Ok(());
    }

    selected_package_manager(Config::storage()?).reset()?;
    Output::success("Preference cleared, using npm");
    Ok(())
}
