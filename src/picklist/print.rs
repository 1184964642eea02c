use colored::Colorize;
use picklist::config::PicklistConfig;
use picklist::error::Result;
use picklist::model::OptionPairList;

pub(crate) fn print_pairs(pairs: &OptionPairList) {
    for pair in pairs {
        println!("{}\t{}", pair.value(), pair.display_text());
    }
}

pub(crate) fn print_pairs_json(pairs: &OptionPairList) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(pairs)?);
    Ok(())
}

pub(crate) fn print_config(config: &PicklistConfig) {
    println!("value_field = {}", config.value_field);
    println!("display_format = {}", config.display_format);
}

pub(crate) fn print_config_value(value: &str) {
    println!("{}", value);
}

pub(crate) fn print_success(message: &str) {
    println!("{}", message.green());
}

pub(crate) fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".red(), message);
}
