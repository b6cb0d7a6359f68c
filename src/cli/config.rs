use crate::error::{ExtractoError, Result};
use crate::settings::{load_settings, save_settings, settings_path, Settings};

fn apply(
    mut settings: Settings,
    currency: Option<String>,
    limit: Option<usize>,
    no_limit: bool,
) -> Result<Settings> {
    if let Some(symbol) = currency {
        if symbol.trim().is_empty() {
            return Err(ExtractoError::Settings("currency marker cannot be empty".to_string()));
        }
        settings.currency_symbol = symbol;
    }
    if let Some(n) = limit {
        if n == 0 {
            return Err(ExtractoError::Settings("limit must be at least 1".to_string()));
        }
        settings.list_limit = Some(n);
    }
    if no_limit {
        settings.list_limit = None;
    }
    Ok(settings)
}

pub fn run(currency: Option<String>, limit: Option<usize>, no_limit: bool) -> Result<()> {
    let changing = currency.is_some() || limit.is_some() || no_limit;
    let settings = load_settings();
    let settings = if changing {
        let updated = apply(settings, currency, limit, no_limit)?;
        save_settings(&updated)?;
        println!("Saved {}", settings_path().display());
        updated
    } else {
        settings
    };

    println!("Currency:    {}", settings.currency_symbol);
    println!(
        "List limit:  {}",
        settings
            .list_limit
            .map(|n| n.to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );
    Ok(())
}
