//! Dialing codes offered next to the contact number field.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryCode {
    pub code: &'static str,
    pub country: &'static str,
}

impl CountryCode {
    const fn new(code: &'static str, country: &'static str) -> Self {
        Self { code, country }
    }

    pub fn label(&self) -> String {
        format!("{} ({})", self.code, self.country)
    }
}

pub const DEFAULT_DIALING_CODE: &str = "+91";

pub const COUNTRY_CODES: &[CountryCode] = &[
    CountryCode::new("+91", "India"),
    CountryCode::new("+1", "United States / Canada"),
    CountryCode::new("+7", "Russia"),
    CountryCode::new("+20", "Egypt"),
    CountryCode::new("+27", "South Africa"),
    CountryCode::new("+30", "Greece"),
    CountryCode::new("+31", "Netherlands"),
    CountryCode::new("+32", "Belgium"),
    CountryCode::new("+33", "France"),
    CountryCode::new("+34", "Spain"),
    CountryCode::new("+36", "Hungary"),
    CountryCode::new("+39", "Italy"),
    CountryCode::new("+40", "Romania"),
    CountryCode::new("+41", "Switzerland"),
    CountryCode::new("+43", "Austria"),
    CountryCode::new("+44", "United Kingdom"),
    CountryCode::new("+45", "Denmark"),
    CountryCode::new("+46", "Sweden"),
    CountryCode::new("+47", "Norway"),
    CountryCode::new("+48", "Poland"),
    CountryCode::new("+49", "Germany"),
    CountryCode::new("+51", "Peru"),
    CountryCode::new("+52", "Mexico"),
    CountryCode::new("+53", "Cuba"),
    CountryCode::new("+54", "Argentina"),
    CountryCode::new("+55", "Brazil"),
    CountryCode::new("+56", "Chile"),
    CountryCode::new("+57", "Colombia"),
    CountryCode::new("+58", "Venezuela"),
    CountryCode::new("+60", "Malaysia"),
    CountryCode::new("+61", "Australia"),
    CountryCode::new("+62", "Indonesia"),
    CountryCode::new("+63", "Philippines"),
    CountryCode::new("+64", "New Zealand"),
    CountryCode::new("+65", "Singapore"),
    CountryCode::new("+66", "Thailand"),
    CountryCode::new("+81", "Japan"),
    CountryCode::new("+82", "South Korea"),
    CountryCode::new("+84", "Vietnam"),
    CountryCode::new("+86", "China"),
    CountryCode::new("+90", "Turkey"),
    CountryCode::new("+92", "Pakistan"),
    CountryCode::new("+93", "Afghanistan"),
    CountryCode::new("+94", "Sri Lanka"),
    CountryCode::new("+95", "Myanmar"),
    CountryCode::new("+98", "Iran"),
    CountryCode::new("+211", "South Sudan"),
    CountryCode::new("+212", "Morocco"),
    CountryCode::new("+213", "Algeria"),
    CountryCode::new("+216", "Tunisia"),
    CountryCode::new("+218", "Libya"),
    CountryCode::new("+220", "Gambia"),
    CountryCode::new("+221", "Senegal"),
    CountryCode::new("+222", "Mauritania"),
    CountryCode::new("+223", "Mali"),
    CountryCode::new("+224", "Guinea"),
    CountryCode::new("+225", "Ivory Coast"),
    CountryCode::new("+226", "Burkina Faso"),
    CountryCode::new("+227", "Niger"),
    CountryCode::new("+228", "Togo"),
    CountryCode::new("+229", "Benin"),
    CountryCode::new("+230", "Mauritius"),
    CountryCode::new("+231", "Liberia"),
    CountryCode::new("+232", "Sierra Leone"),
    CountryCode::new("+233", "Ghana"),
    CountryCode::new("+234", "Nigeria"),
    CountryCode::new("+235", "Chad"),
    CountryCode::new("+236", "Central African Republic"),
    CountryCode::new("+237", "Cameroon"),
    CountryCode::new("+238", "Cape Verde"),
    CountryCode::new("+239", "Sao Tome and Principe"),
    CountryCode::new("+240", "Equatorial Guinea"),
    CountryCode::new("+241", "Gabon"),
    CountryCode::new("+242", "Congo"),
    CountryCode::new("+243", "Democratic Republic of the Congo"),
    CountryCode::new("+244", "Angola"),
    CountryCode::new("+245", "Guinea-Bissau"),
    CountryCode::new("+246", "British Indian Ocean Territory"),
    CountryCode::new("+247", "Ascension Island"),
    CountryCode::new("+248", "Seychelles"),
    CountryCode::new("+249", "Sudan"),
    CountryCode::new("+250", "Rwanda"),
    CountryCode::new("+251", "Ethiopia"),
    CountryCode::new("+252", "Somalia"),
    CountryCode::new("+253", "Djibouti"),
    CountryCode::new("+254", "Kenya"),
    CountryCode::new("+255", "Tanzania"),
    CountryCode::new("+256", "Uganda"),
    CountryCode::new("+257", "Burundi"),
    CountryCode::new("+258", "Mozambique"),
    CountryCode::new("+260", "Zambia"),
    CountryCode::new("+261", "Madagascar"),
    CountryCode::new("+262", "Reunion"),
    CountryCode::new("+263", "Zimbabwe"),
    CountryCode::new("+264", "Namibia"),
    CountryCode::new("+265", "Malawi"),
    CountryCode::new("+266", "Lesotho"),
    CountryCode::new("+267", "Botswana"),
    CountryCode::new("+268", "Eswatini"),
    CountryCode::new("+269", "Comoros"),
    CountryCode::new("+290", "Saint Helena"),
    CountryCode::new("+291", "Eritrea"),
    CountryCode::new("+297", "Aruba"),
    CountryCode::new("+298", "Faroe Islands"),
    CountryCode::new("+299", "Greenland"),
    CountryCode::new("+350", "Gibraltar"),
    CountryCode::new("+351", "Portugal"),
    CountryCode::new("+352", "Luxembourg"),
    CountryCode::new("+353", "Ireland"),
    CountryCode::new("+354", "Iceland"),
    CountryCode::new("+355", "Albania"),
    CountryCode::new("+356", "Malta"),
    CountryCode::new("+357", "Cyprus"),
    CountryCode::new("+358", "Finland"),
    CountryCode::new("+359", "Bulgaria"),
    CountryCode::new("+370", "Lithuania"),
    CountryCode::new("+371", "Latvia"),
    CountryCode::new("+372", "Estonia"),
    CountryCode::new("+373", "Moldova"),
    CountryCode::new("+374", "Armenia"),
    CountryCode::new("+375", "Belarus"),
    CountryCode::new("+376", "Andorra"),
    CountryCode::new("+377", "Monaco"),
    CountryCode::new("+378", "San Marino"),
    CountryCode::new("+380", "Ukraine"),
    CountryCode::new("+381", "Serbia"),
    CountryCode::new("+382", "Montenegro"),
    CountryCode::new("+383", "Kosovo"),
    CountryCode::new("+385", "Croatia"),
    CountryCode::new("+386", "Slovenia"),
    CountryCode::new("+387", "Bosnia and Herzegovina"),
    CountryCode::new("+389", "North Macedonia"),
    CountryCode::new("+420", "Czech Republic"),
    CountryCode::new("+421", "Slovakia"),
    CountryCode::new("+423", "Liechtenstein"),
    CountryCode::new("+500", "Falkland Islands"),
    CountryCode::new("+501", "Belize"),
    CountryCode::new("+502", "Guatemala"),
    CountryCode::new("+503", "El Salvador"),
    CountryCode::new("+504", "Honduras"),
    CountryCode::new("+505", "Nicaragua"),
    CountryCode::new("+506", "Costa Rica"),
    CountryCode::new("+507", "Panama"),
    CountryCode::new("+508", "Saint Pierre and Miquelon"),
    CountryCode::new("+509", "Haiti"),
    CountryCode::new("+590", "Guadeloupe"),
    CountryCode::new("+591", "Bolivia"),
    CountryCode::new("+592", "Guyana"),
    CountryCode::new("+593", "Ecuador"),
    CountryCode::new("+594", "French Guiana"),
    CountryCode::new("+595", "Paraguay"),
    CountryCode::new("+596", "Martinique"),
    CountryCode::new("+597", "Suriname"),
    CountryCode::new("+598", "Uruguay"),
    CountryCode::new("+599", "Caribbean Netherlands"),
    CountryCode::new("+670", "Timor-Leste"),
    CountryCode::new("+672", "Norfolk Island"),
    CountryCode::new("+673", "Brunei"),
    CountryCode::new("+674", "Nauru"),
    CountryCode::new("+675", "Papua New Guinea"),
    CountryCode::new("+676", "Tonga"),
    CountryCode::new("+677", "Solomon Islands"),
    CountryCode::new("+678", "Vanuatu"),
    CountryCode::new("+679", "Fiji"),
    CountryCode::new("+680", "Palau"),
    CountryCode::new("+681", "Wallis and Futuna"),
    CountryCode::new("+682", "Cook Islands"),
    CountryCode::new("+683", "Niue"),
    CountryCode::new("+685", "Samoa"),
    CountryCode::new("+686", "Kiribati"),
    CountryCode::new("+687", "New Caledonia"),
    CountryCode::new("+688", "Tuvalu"),
    CountryCode::new("+689", "French Polynesia"),
    CountryCode::new("+690", "Tokelau"),
    CountryCode::new("+691", "Micronesia"),
    CountryCode::new("+692", "Marshall Islands"),
];

/// `(value, label, selected)` for each option; only the first entry carrying
/// the default code is pre-selected.
pub fn country_options() -> impl Iterator<Item = (&'static str, String, bool)> {
    let default_index = COUNTRY_CODES
        .iter()
        .position(|c| c.code == DEFAULT_DIALING_CODE);
    COUNTRY_CODES
        .iter()
        .enumerate()
        .map(move |(i, c)| (c.code, c.label(), Some(i) == default_index))
}
