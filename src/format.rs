/// Formatting configuration for money amounts.
///
/// Delegates that render currency fields receive one of these explicitly
/// instead of reaching for a process-wide formatter, keeping renders free
/// of global state.
///
/// # Examples
///
/// ```
/// use folio::Currency;
///
/// let euro = Currency::new("€");
/// assert_eq!(euro.format(1234.5), "1.234,50 €");
///
/// let dollar = Currency::new("$").with_separators(',', '.');
/// assert_eq!(dollar.format(1234.5), "1,234.50 $");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Currency {
    /// The currency symbol, appended after the amount.
    symbol: String,
    /// Separator between groups of three integer digits.
    grouping: char,
    /// Separator between the integer and fractional parts.
    decimal: char,
    /// Number of fractional digits.
    places: usize,
}

impl Currency {
    /// Create a new Currency with the given symbol and `1.234,56` style
    /// separators.
    pub fn new<T>(symbol: T) -> Self
    where
        T: Into<String>,
    {
        Self {
            symbol: symbol.into(),
            grouping: '.',
            decimal: ',',
            places: 2,
        }
    }

    /// Set the grouping and decimal separators.
    ///
    /// Returns the Currency, so additional methods may be chained.
    pub fn with_separators(mut self, grouping: char, decimal: char) -> Self {
        self.grouping = grouping;
        self.decimal = decimal;

        self
    }

    /// Set the number of fractional digits.
    ///
    /// Returns the Currency, so additional methods may be chained.
    pub fn with_places(mut self, places: usize) -> Self {
        self.places = places;

        self
    }

    /// Format the amount as text, rounding to the configured number of
    /// fractional digits.
    pub fn format(&self, amount: f64) -> String {
        let scale = 10u64.pow(self.places as u32);
        let total = (amount.abs() * scale as f64).round() as u64;
        let units = (total / scale).to_string();
        let fraction = total % scale;

        let mut result = String::new();
        if amount < 0.0 && total > 0 {
            result.push('-');
        }

        for (position, digit) in units.chars().enumerate() {
            if position > 0 && (units.len() - position) % 3 == 0 {
                result.push(self.grouping);
            }
            result.push(digit);
        }

        if self.places > 0 {
            result.push(self.decimal);
            result.push_str(&format!("{:0width$}", fraction, width = self.places));
        }

        result.push(' ');
        result.push_str(&self.symbol);
        result
    }
}
