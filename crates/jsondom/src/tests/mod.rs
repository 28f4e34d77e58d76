mod parse_bad;
mod property_partition;
mod values;
