//! ISO 4217 reference table used to validate user supplied currency codes.

/// Static description of one currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: Option<&'static str>,
}

const fn info(code: &'static str, name: &'static str, symbol: &'static str) -> CurrencyInfo {
    CurrencyInfo {
        code,
        name,
        symbol: Some(symbol),
    }
}

const fn no_symbol(code: &'static str, name: &'static str) -> CurrencyInfo {
    CurrencyInfo {
        code,
        name,
        symbol: None,
    }
}

// Sorted by code for binary search. Fund codes, precious metals and the
// XTS/XXX placeholders are not listed.
static CURRENCIES: &[CurrencyInfo] = &[
    info("AED", "UAE Dirham", "د.إ"),
    info("AFN", "Afghani", "؋"),
    info("ALL", "Lek", "Lek"),
    info("AMD", "Armenian Dram", "֏"),
    info("ANG", "Netherlands Antillean Guilder", "ƒ"),
    info("AOA", "Kwanza", "Kz"),
    info("ARS", "Argentine Peso", "$"),
    info("AUD", "Australian Dollar", "A$"),
    info("AWG", "Aruban Florin", "ƒ"),
    info("AZN", "Azerbaijan Manat", "₼"),
    info("BAM", "Convertible Mark", "KM"),
    info("BBD", "Barbados Dollar", "$"),
    info("BDT", "Taka", "৳"),
    info("BGN", "Bulgarian Lev", "лв"),
    info("BHD", "Bahraini Dinar", ".د.ب"),
    info("BIF", "Burundi Franc", "FBu"),
    info("BMD", "Bermudian Dollar", "$"),
    info("BND", "Brunei Dollar", "$"),
    info("BOB", "Boliviano", "$b"),
    info("BRL", "Brazilian Real", "R$"),
    info("BSD", "Bahamian Dollar", "$"),
    info("BTN", "Ngultrum", "Nu."),
    info("BWP", "Pula", "P"),
    info("BYN", "Belarusian Ruble", "Br"),
    info("BZD", "Belize Dollar", "BZ$"),
    info("CAD", "Canadian Dollar", "C$"),
    info("CDF", "Congolese Franc", "FC"),
    info("CHF", "Swiss Franc", "CHF"),
    info("CLP", "Chilean Peso", "$"),
    info("CNY", "Yuan Renminbi", "¥"),
    info("COP", "Colombian Peso", "$"),
    info("CRC", "Costa Rican Colon", "₡"),
    info("CUP", "Cuban Peso", "₱"),
    info("CVE", "Cabo Verde Escudo", "$"),
    info("CZK", "Czech Koruna", "Kč"),
    info("DJF", "Djibouti Franc", "Fdj"),
    info("DKK", "Danish Krone", "kr"),
    info("DOP", "Dominican Peso", "RD$"),
    info("DZD", "Algerian Dinar", "دج"),
    info("EGP", "Egyptian Pound", "£"),
    info("ERN", "Nakfa", "Nfk"),
    info("ETB", "Ethiopian Birr", "Br"),
    info("EUR", "Euro", "€"),
    info("FJD", "Fiji Dollar", "$"),
    info("FKP", "Falkland Islands Pound", "£"),
    info("GBP", "Pound Sterling", "£"),
    info("GEL", "Lari", "₾"),
    info("GHS", "Ghana Cedi", "GH₵"),
    info("GIP", "Gibraltar Pound", "£"),
    info("GMD", "Dalasi", "D"),
    info("GNF", "Guinean Franc", "FG"),
    info("GTQ", "Quetzal", "Q"),
    info("GYD", "Guyana Dollar", "$"),
    info("HKD", "Hong Kong Dollar", "HK$"),
    info("HNL", "Lempira", "L"),
    info("HTG", "Gourde", "G"),
    info("HUF", "Forint", "Ft"),
    info("IDR", "Rupiah", "Rp"),
    info("ILS", "New Israeli Sheqel", "₪"),
    info("INR", "Indian Rupee", "₹"),
    info("IQD", "Iraqi Dinar", "ع.د"),
    info("IRR", "Iranian Rial", "﷼"),
    info("ISK", "Iceland Krona", "kr"),
    info("JMD", "Jamaican Dollar", "J$"),
    info("JOD", "Jordanian Dinar", "JD"),
    info("JPY", "Yen", "¥"),
    info("KES", "Kenyan Shilling", "KSh"),
    info("KGS", "Som", "лв"),
    info("KHR", "Riel", "៛"),
    info("KMF", "Comorian Franc", "CF"),
    info("KPW", "North Korean Won", "₩"),
    info("KRW", "Won", "₩"),
    info("KWD", "Kuwaiti Dinar", "KD"),
    info("KYD", "Cayman Islands Dollar", "$"),
    info("KZT", "Tenge", "₸"),
    info("LAK", "Lao Kip", "₭"),
    info("LBP", "Lebanese Pound", "£"),
    info("LKR", "Sri Lanka Rupee", "₨"),
    info("LRD", "Liberian Dollar", "$"),
    info("LSL", "Loti", "M"),
    info("LYD", "Libyan Dinar", "LD"),
    info("MAD", "Moroccan Dirham", "MAD"),
    info("MDL", "Moldovan Leu", "lei"),
    info("MGA", "Malagasy Ariary", "Ar"),
    info("MKD", "Denar", "ден"),
    info("MMK", "Kyat", "K"),
    info("MNT", "Tugrik", "₮"),
    info("MOP", "Pataca", "MOP$"),
    info("MRU", "Ouguiya", "UM"),
    info("MUR", "Mauritius Rupee", "₨"),
    info("MVR", "Rufiyaa", "Rf"),
    info("MWK", "Malawi Kwacha", "MK"),
    info("MXN", "Mexican Peso", "$"),
    info("MYR", "Malaysian Ringgit", "RM"),
    info("MZN", "Mozambique Metical", "MT"),
    info("NAD", "Namibia Dollar", "$"),
    info("NGN", "Naira", "₦"),
    info("NIO", "Cordoba Oro", "C$"),
    info("NOK", "Norwegian Krone", "kr"),
    info("NPR", "Nepalese Rupee", "₨"),
    info("NZD", "New Zealand Dollar", "NZ$"),
    info("OMR", "Rial Omani", "﷼"),
    info("PAB", "Balboa", "B/."),
    info("PEN", "Sol", "S/."),
    info("PGK", "Kina", "K"),
    info("PHP", "Philippine Peso", "₱"),
    info("PKR", "Pakistan Rupee", "₨"),
    info("PLN", "Zloty", "zł"),
    info("PYG", "Guarani", "Gs"),
    info("QAR", "Qatari Rial", "﷼"),
    info("RON", "Romanian Leu", "lei"),
    info("RSD", "Serbian Dinar", "Дин."),
    info("RUB", "Russian Ruble", "₽"),
    info("RWF", "Rwanda Franc", "R₣"),
    info("SAR", "Saudi Riyal", "﷼"),
    info("SBD", "Solomon Islands Dollar", "$"),
    info("SCR", "Seychelles Rupee", "₨"),
    info("SDG", "Sudanese Pound", "ج.س."),
    info("SEK", "Swedish Krona", "kr"),
    info("SGD", "Singapore Dollar", "S$"),
    info("SHP", "Saint Helena Pound", "£"),
    info("SLE", "Leone", "Le"),
    info("SOS", "Somali Shilling", "S"),
    info("SRD", "Surinam Dollar", "$"),
    info("SSP", "South Sudanese Pound", "£"),
    info("STN", "Dobra", "Db"),
    info("SVC", "El Salvador Colon", "$"),
    info("SYP", "Syrian Pound", "£"),
    info("SZL", "Lilangeni", "E"),
    info("THB", "Baht", "฿"),
    info("TJS", "Somoni", "SM"),
    info("TMT", "Turkmenistan New Manat", "T"),
    info("TND", "Tunisian Dinar", "د.ت"),
    info("TOP", "Pa'anga", "T$"),
    info("TRY", "Turkish Lira", "₺"),
    info("TTD", "Trinidad and Tobago Dollar", "TT$"),
    info("TWD", "New Taiwan Dollar", "NT$"),
    info("TZS", "Tanzanian Shilling", "TSh"),
    info("UAH", "Hryvnia", "₴"),
    info("UGX", "Uganda Shilling", "USh"),
    info("USD", "US Dollar", "$"),
    info("UYU", "Peso Uruguayo", "$U"),
    info("UZS", "Uzbekistan Sum", "лв"),
    info("VES", "Bolivar Soberano", "Bs."),
    info("VND", "Dong", "₫"),
    no_symbol("VUV", "Vatu"),
    no_symbol("WST", "Tala"),
    info("XAF", "CFA Franc BEAC", "FCFA"),
    info("XCD", "East Caribbean Dollar", "$"),
    info("XOF", "CFA Franc BCEAO", "CFA"),
    no_symbol("XPF", "CFP Franc"),
    info("YER", "Yemeni Rial", "﷼"),
    info("ZAR", "Rand", "R"),
    info("ZMW", "Zambian Kwacha", "ZK"),
    no_symbol("ZWL", "Zimbabwe Dollar"),
];

/// Trims and upper-cases a user supplied code.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Looks up a currency by code, ignoring case and surrounding whitespace.
pub fn lookup(code: &str) -> Option<&'static CurrencyInfo> {
    let code = normalize_code(code);
    CURRENCIES
        .binary_search_by(|c| c.code.cmp(code.as_str()))
        .ok()
        .map(|idx| &CURRENCIES[idx])
}

pub fn validate_currency_code(code: &str) -> bool {
    lookup(code).is_some()
}

pub fn currency_symbol(code: &str) -> Option<&'static str> {
    lookup(code).and_then(|c| c.symbol)
}

pub fn currency_name(code: &str) -> Option<&'static str> {
    lookup(code).map(|c| c.name)
}

pub fn all_currencies() -> &'static [CurrencyInfo] {
    CURRENCIES
}
