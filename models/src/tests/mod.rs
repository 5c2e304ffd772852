mod check_result;
mod holiday_query;
