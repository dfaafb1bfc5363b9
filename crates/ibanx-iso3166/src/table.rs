//! Static ISO 3166-1 alpha-2 table, sorted by code for binary search.

use crate::country::{Country, Status};

pub(crate) static COUNTRIES: &[Country] = &[
    Country::new("AC", Status::ExceptionallyReserved, "Ascension Island"),
    Country::new("AD", Status::OfficiallyAssigned, "Andorra"),
    Country::new("AE", Status::OfficiallyAssigned, "United Arab Emirates"),
    Country::new("AF", Status::OfficiallyAssigned, "Afghanistan"),
    Country::new("AG", Status::OfficiallyAssigned, "Antigua and Barbuda"),
    Country::new("AI", Status::OfficiallyAssigned, "Anguilla"),
    Country::new("AL", Status::OfficiallyAssigned, "Albania"),
    Country::new("AM", Status::OfficiallyAssigned, "Armenia"),
    Country::new("AN", Status::TransitionallyReserved, "Netherlands Antilles"),
    Country::new("AO", Status::OfficiallyAssigned, "Angola"),
    Country::new("AQ", Status::OfficiallyAssigned, "Antarctica"),
    Country::new("AR", Status::OfficiallyAssigned, "Argentina"),
    Country::new("AS", Status::OfficiallyAssigned, "American Samoa"),
    Country::new("AT", Status::OfficiallyAssigned, "Austria"),
    Country::new("AU", Status::OfficiallyAssigned, "Australia"),
    Country::new("AW", Status::OfficiallyAssigned, "Aruba"),
    Country::new("AX", Status::OfficiallyAssigned, "Åland Islands"),
    Country::new("AZ", Status::OfficiallyAssigned, "Azerbaijan"),
    Country::new("BA", Status::OfficiallyAssigned, "Bosnia and Herzegovina"),
    Country::new("BB", Status::OfficiallyAssigned, "Barbados"),
    Country::new("BD", Status::OfficiallyAssigned, "Bangladesh"),
    Country::new("BE", Status::OfficiallyAssigned, "Belgium"),
    Country::new("BF", Status::OfficiallyAssigned, "Burkina Faso"),
    Country::new("BG", Status::OfficiallyAssigned, "Bulgaria"),
    Country::new("BH", Status::OfficiallyAssigned, "Bahrain"),
    Country::new("BI", Status::OfficiallyAssigned, "Burundi"),
    Country::new("BJ", Status::OfficiallyAssigned, "Benin"),
    Country::new("BL", Status::OfficiallyAssigned, "Saint Barthélemy"),
    Country::new("BM", Status::OfficiallyAssigned, "Bermuda"),
    Country::new("BN", Status::OfficiallyAssigned, "Brunei Darussalam"),
    Country::new("BO", Status::OfficiallyAssigned, "Bolivia"),
    Country::new("BQ", Status::OfficiallyAssigned, "Bonaire, Sint Eustatius and Saba"),
    Country::new("BR", Status::OfficiallyAssigned, "Brazil"),
    Country::new("BS", Status::OfficiallyAssigned, "Bahamas"),
    Country::new("BT", Status::OfficiallyAssigned, "Bhutan"),
    Country::new("BU", Status::TransitionallyReserved, "Burma"),
    Country::new("BV", Status::OfficiallyAssigned, "Bouvet Island"),
    Country::new("BW", Status::OfficiallyAssigned, "Botswana"),
    Country::new("BY", Status::OfficiallyAssigned, "Belarus"),
    Country::new("BZ", Status::OfficiallyAssigned, "Belize"),
    Country::new("CA", Status::OfficiallyAssigned, "Canada"),
    Country::new("CC", Status::OfficiallyAssigned, "Cocos (Keeling) Islands"),
    Country::new("CD", Status::OfficiallyAssigned, "Congo, Democratic Republic of the"),
    Country::new("CF", Status::OfficiallyAssigned, "Central African Republic"),
    Country::new("CG", Status::OfficiallyAssigned, "Congo"),
    Country::new("CH", Status::OfficiallyAssigned, "Switzerland"),
    Country::new("CI", Status::OfficiallyAssigned, "Côte d'Ivoire"),
    Country::new("CK", Status::OfficiallyAssigned, "Cook Islands"),
    Country::new("CL", Status::OfficiallyAssigned, "Chile"),
    Country::new("CM", Status::OfficiallyAssigned, "Cameroon"),
    Country::new("CN", Status::OfficiallyAssigned, "China"),
    Country::new("CO", Status::OfficiallyAssigned, "Colombia"),
    Country::new("CP", Status::ExceptionallyReserved, "Clipperton Island"),
    Country::new("CR", Status::OfficiallyAssigned, "Costa Rica"),
    Country::new("CS", Status::TransitionallyReserved, "Serbia and Montenegro"),
    Country::new("CT", Status::FormerlyAssigned, "Canton and Enderbury Islands"),
    Country::new("CU", Status::OfficiallyAssigned, "Cuba"),
    Country::new("CV", Status::OfficiallyAssigned, "Cabo Verde"),
    Country::new("CW", Status::OfficiallyAssigned, "Curaçao"),
    Country::new("CX", Status::OfficiallyAssigned, "Christmas Island"),
    Country::new("CY", Status::OfficiallyAssigned, "Cyprus"),
    Country::new("CZ", Status::OfficiallyAssigned, "Czechia"),
    Country::new("DD", Status::FormerlyAssigned, "German Democratic Republic"),
    Country::new("DE", Status::OfficiallyAssigned, "Germany"),
    Country::new("DG", Status::ExceptionallyReserved, "Diego Garcia"),
    Country::new("DJ", Status::OfficiallyAssigned, "Djibouti"),
    Country::new("DK", Status::OfficiallyAssigned, "Denmark"),
    Country::new("DM", Status::OfficiallyAssigned, "Dominica"),
    Country::new("DO", Status::OfficiallyAssigned, "Dominican Republic"),
    Country::new("DY", Status::IndeterminatelyReserved, "Benin"),
    Country::new("DZ", Status::OfficiallyAssigned, "Algeria"),
    Country::new("EA", Status::ExceptionallyReserved, "Ceuta, Melilla"),
    Country::new("EC", Status::OfficiallyAssigned, "Ecuador"),
    Country::new("EE", Status::OfficiallyAssigned, "Estonia"),
    Country::new("EG", Status::OfficiallyAssigned, "Egypt"),
    Country::new("EH", Status::OfficiallyAssigned, "Western Sahara"),
    Country::new("ER", Status::OfficiallyAssigned, "Eritrea"),
    Country::new("ES", Status::OfficiallyAssigned, "Spain"),
    Country::new("ET", Status::OfficiallyAssigned, "Ethiopia"),
    Country::new("EU", Status::ExceptionallyReserved, "European Union"),
    Country::new("EW", Status::IndeterminatelyReserved, "Estonia"),
    Country::new("EZ", Status::ExceptionallyReserved, "Eurozone"),
    Country::new("FI", Status::OfficiallyAssigned, "Finland"),
    Country::new("FJ", Status::OfficiallyAssigned, "Fiji"),
    Country::new("FK", Status::OfficiallyAssigned, "Falkland Islands (Malvinas)"),
    Country::new("FL", Status::IndeterminatelyReserved, "Liechtenstein"),
    Country::new("FM", Status::OfficiallyAssigned, "Micronesia"),
    Country::new("FO", Status::OfficiallyAssigned, "Faroe Islands"),
    Country::new("FQ", Status::FormerlyAssigned, "French Southern and Antarctic Territories"),
    Country::new("FR", Status::OfficiallyAssigned, "France"),
    Country::new("FX", Status::ExceptionallyReserved, "France, Metropolitan"),
    Country::new("GA", Status::OfficiallyAssigned, "Gabon"),
    Country::new("GB", Status::OfficiallyAssigned, "United Kingdom"),
    Country::new("GD", Status::OfficiallyAssigned, "Grenada"),
    Country::new("GE", Status::OfficiallyAssigned, "Georgia"),
    Country::new("GF", Status::OfficiallyAssigned, "French Guiana"),
    Country::new("GG", Status::OfficiallyAssigned, "Guernsey"),
    Country::new("GH", Status::OfficiallyAssigned, "Ghana"),
    Country::new("GI", Status::OfficiallyAssigned, "Gibraltar"),
    Country::new("GL", Status::OfficiallyAssigned, "Greenland"),
    Country::new("GM", Status::OfficiallyAssigned, "Gambia"),
    Country::new("GN", Status::OfficiallyAssigned, "Guinea"),
    Country::new("GP", Status::OfficiallyAssigned, "Guadeloupe"),
    Country::new("GQ", Status::OfficiallyAssigned, "Equatorial Guinea"),
    Country::new("GR", Status::OfficiallyAssigned, "Greece"),
    Country::new("GS", Status::OfficiallyAssigned, "South Georgia and the South Sandwich Islands"),
    Country::new("GT", Status::OfficiallyAssigned, "Guatemala"),
    Country::new("GU", Status::OfficiallyAssigned, "Guam"),
    Country::new("GW", Status::OfficiallyAssigned, "Guinea-Bissau"),
    Country::new("GY", Status::OfficiallyAssigned, "Guyana"),
    Country::new("HK", Status::OfficiallyAssigned, "Hong Kong"),
    Country::new("HM", Status::OfficiallyAssigned, "Heard Island and McDonald Islands"),
    Country::new("HN", Status::OfficiallyAssigned, "Honduras"),
    Country::new("HR", Status::OfficiallyAssigned, "Croatia"),
    Country::new("HT", Status::OfficiallyAssigned, "Haiti"),
    Country::new("HU", Status::OfficiallyAssigned, "Hungary"),
    Country::new("HV", Status::FormerlyAssigned, "Upper Volta"),
    Country::new("IC", Status::ExceptionallyReserved, "Canary Islands"),
    Country::new("ID", Status::OfficiallyAssigned, "Indonesia"),
    Country::new("IE", Status::OfficiallyAssigned, "Ireland"),
    Country::new("IL", Status::OfficiallyAssigned, "Israel"),
    Country::new("IM", Status::OfficiallyAssigned, "Isle of Man"),
    Country::new("IN", Status::OfficiallyAssigned, "India"),
    Country::new("IO", Status::OfficiallyAssigned, "British Indian Ocean Territory"),
    Country::new("IQ", Status::OfficiallyAssigned, "Iraq"),
    Country::new("IR", Status::OfficiallyAssigned, "Iran"),
    Country::new("IS", Status::OfficiallyAssigned, "Iceland"),
    Country::new("IT", Status::OfficiallyAssigned, "Italy"),
    Country::new("JA", Status::IndeterminatelyReserved, "Jamaica"),
    Country::new("JE", Status::OfficiallyAssigned, "Jersey"),
    Country::new("JM", Status::OfficiallyAssigned, "Jamaica"),
    Country::new("JO", Status::OfficiallyAssigned, "Jordan"),
    Country::new("JP", Status::OfficiallyAssigned, "Japan"),
    Country::new("JT", Status::FormerlyAssigned, "Johnston Island"),
    Country::new("KE", Status::OfficiallyAssigned, "Kenya"),
    Country::new("KG", Status::OfficiallyAssigned, "Kyrgyzstan"),
    Country::new("KH", Status::OfficiallyAssigned, "Cambodia"),
    Country::new("KI", Status::OfficiallyAssigned, "Kiribati"),
    Country::new("KM", Status::OfficiallyAssigned, "Comoros"),
    Country::new("KN", Status::OfficiallyAssigned, "Saint Kitts and Nevis"),
    Country::new("KP", Status::OfficiallyAssigned, "Korea, Democratic People's Republic of"),
    Country::new("KR", Status::OfficiallyAssigned, "Korea, Republic of"),
    Country::new("KW", Status::OfficiallyAssigned, "Kuwait"),
    Country::new("KY", Status::OfficiallyAssigned, "Cayman Islands"),
    Country::new("KZ", Status::OfficiallyAssigned, "Kazakhstan"),
    Country::new("LA", Status::OfficiallyAssigned, "Lao People's Democratic Republic"),
    Country::new("LB", Status::OfficiallyAssigned, "Lebanon"),
    Country::new("LC", Status::OfficiallyAssigned, "Saint Lucia"),
    Country::new("LF", Status::IndeterminatelyReserved, "Libya Fezzan"),
    Country::new("LI", Status::OfficiallyAssigned, "Liechtenstein"),
    Country::new("LK", Status::OfficiallyAssigned, "Sri Lanka"),
    Country::new("LR", Status::OfficiallyAssigned, "Liberia"),
    Country::new("LS", Status::OfficiallyAssigned, "Lesotho"),
    Country::new("LT", Status::OfficiallyAssigned, "Lithuania"),
    Country::new("LU", Status::OfficiallyAssigned, "Luxembourg"),
    Country::new("LV", Status::OfficiallyAssigned, "Latvia"),
    Country::new("LY", Status::OfficiallyAssigned, "Libya"),
    Country::new("MA", Status::OfficiallyAssigned, "Morocco"),
    Country::new("MC", Status::OfficiallyAssigned, "Monaco"),
    Country::new("MD", Status::OfficiallyAssigned, "Moldova"),
    Country::new("ME", Status::OfficiallyAssigned, "Montenegro"),
    Country::new("MF", Status::OfficiallyAssigned, "Saint Martin (French part)"),
    Country::new("MG", Status::OfficiallyAssigned, "Madagascar"),
    Country::new("MH", Status::OfficiallyAssigned, "Marshall Islands"),
    Country::new("MI", Status::FormerlyAssigned, "Midway Islands"),
    Country::new("MK", Status::OfficiallyAssigned, "North Macedonia"),
    Country::new("ML", Status::OfficiallyAssigned, "Mali"),
    Country::new("MM", Status::OfficiallyAssigned, "Myanmar"),
    Country::new("MN", Status::OfficiallyAssigned, "Mongolia"),
    Country::new("MO", Status::OfficiallyAssigned, "Macao"),
    Country::new("MP", Status::OfficiallyAssigned, "Northern Mariana Islands"),
    Country::new("MQ", Status::OfficiallyAssigned, "Martinique"),
    Country::new("MR", Status::OfficiallyAssigned, "Mauritania"),
    Country::new("MS", Status::OfficiallyAssigned, "Montserrat"),
    Country::new("MT", Status::OfficiallyAssigned, "Malta"),
    Country::new("MU", Status::OfficiallyAssigned, "Mauritius"),
    Country::new("MV", Status::OfficiallyAssigned, "Maldives"),
    Country::new("MW", Status::OfficiallyAssigned, "Malawi"),
    Country::new("MX", Status::OfficiallyAssigned, "Mexico"),
    Country::new("MY", Status::OfficiallyAssigned, "Malaysia"),
    Country::new("MZ", Status::OfficiallyAssigned, "Mozambique"),
    Country::new("NA", Status::OfficiallyAssigned, "Namibia"),
    Country::new("NC", Status::OfficiallyAssigned, "New Caledonia"),
    Country::new("NE", Status::OfficiallyAssigned, "Niger"),
    Country::new("NF", Status::OfficiallyAssigned, "Norfolk Island"),
    Country::new("NG", Status::OfficiallyAssigned, "Nigeria"),
    Country::new("NH", Status::FormerlyAssigned, "New Hebrides"),
    Country::new("NI", Status::OfficiallyAssigned, "Nicaragua"),
    Country::new("NL", Status::OfficiallyAssigned, "Netherlands"),
    Country::new("NO", Status::OfficiallyAssigned, "Norway"),
    Country::new("NP", Status::OfficiallyAssigned, "Nepal"),
    Country::new("NQ", Status::FormerlyAssigned, "Dronning Maud Land"),
    Country::new("NR", Status::OfficiallyAssigned, "Nauru"),
    Country::new("NT", Status::TransitionallyReserved, "Neutral Zone"),
    Country::new("NU", Status::OfficiallyAssigned, "Niue"),
    Country::new("NZ", Status::OfficiallyAssigned, "New Zealand"),
    Country::new("OM", Status::OfficiallyAssigned, "Oman"),
    Country::new("PA", Status::OfficiallyAssigned, "Panama"),
    Country::new("PC", Status::FormerlyAssigned, "Pacific Islands, Trust Territory of the"),
    Country::new("PE", Status::OfficiallyAssigned, "Peru"),
    Country::new("PF", Status::OfficiallyAssigned, "French Polynesia"),
    Country::new("PG", Status::OfficiallyAssigned, "Papua New Guinea"),
    Country::new("PH", Status::OfficiallyAssigned, "Philippines"),
    Country::new("PI", Status::IndeterminatelyReserved, "Philippines"),
    Country::new("PK", Status::OfficiallyAssigned, "Pakistan"),
    Country::new("PL", Status::OfficiallyAssigned, "Poland"),
    Country::new("PM", Status::OfficiallyAssigned, "Saint Pierre and Miquelon"),
    Country::new("PN", Status::OfficiallyAssigned, "Pitcairn"),
    Country::new("PR", Status::OfficiallyAssigned, "Puerto Rico"),
    Country::new("PS", Status::OfficiallyAssigned, "Palestine, State of"),
    Country::new("PT", Status::OfficiallyAssigned, "Portugal"),
    Country::new("PU", Status::FormerlyAssigned, "United States Miscellaneous Pacific Islands"),
    Country::new("PW", Status::OfficiallyAssigned, "Palau"),
    Country::new("PY", Status::OfficiallyAssigned, "Paraguay"),
    Country::new("PZ", Status::FormerlyAssigned, "Panama Canal Zone"),
    Country::new("QA", Status::OfficiallyAssigned, "Qatar"),
    Country::new("RA", Status::IndeterminatelyReserved, "Argentina"),
    Country::new("RB", Status::IndeterminatelyReserved, "Bolivia, Botswana"),
    Country::new("RC", Status::IndeterminatelyReserved, "China"),
    Country::new("RE", Status::OfficiallyAssigned, "Réunion"),
    Country::new("RH", Status::IndeterminatelyReserved, "Haiti"),
    Country::new("RI", Status::IndeterminatelyReserved, "Indonesia"),
    Country::new("RL", Status::IndeterminatelyReserved, "Lebanon"),
    Country::new("RM", Status::IndeterminatelyReserved, "Madagascar"),
    Country::new("RN", Status::IndeterminatelyReserved, "Niger"),
    Country::new("RO", Status::OfficiallyAssigned, "Romania"),
    Country::new("RP", Status::IndeterminatelyReserved, "Philippines"),
    Country::new("RS", Status::OfficiallyAssigned, "Serbia"),
    Country::new("RU", Status::OfficiallyAssigned, "Russian Federation"),
    Country::new("RW", Status::OfficiallyAssigned, "Rwanda"),
    Country::new("SA", Status::OfficiallyAssigned, "Saudi Arabia"),
    Country::new("SB", Status::OfficiallyAssigned, "Solomon Islands"),
    Country::new("SC", Status::OfficiallyAssigned, "Seychelles"),
    Country::new("SD", Status::OfficiallyAssigned, "Sudan"),
    Country::new("SE", Status::OfficiallyAssigned, "Sweden"),
    Country::new("SG", Status::OfficiallyAssigned, "Singapore"),
    Country::new("SH", Status::OfficiallyAssigned, "Saint Helena, Ascension and Tristan da Cunha"),
    Country::new("SI", Status::OfficiallyAssigned, "Slovenia"),
    Country::new("SJ", Status::OfficiallyAssigned, "Svalbard and Jan Mayen"),
    Country::new("SK", Status::OfficiallyAssigned, "Slovakia"),
    Country::new("SL", Status::OfficiallyAssigned, "Sierra Leone"),
    Country::new("SM", Status::OfficiallyAssigned, "San Marino"),
    Country::new("SN", Status::OfficiallyAssigned, "Senegal"),
    Country::new("SO", Status::OfficiallyAssigned, "Somalia"),
    Country::new("SR", Status::OfficiallyAssigned, "Suriname"),
    Country::new("SS", Status::OfficiallyAssigned, "South Sudan"),
    Country::new("ST", Status::OfficiallyAssigned, "Sao Tome and Principe"),
    Country::new("SU", Status::ExceptionallyReserved, "USSR"),
    Country::new("SV", Status::OfficiallyAssigned, "El Salvador"),
    Country::new("SX", Status::OfficiallyAssigned, "Sint Maarten (Dutch part)"),
    Country::new("SY", Status::OfficiallyAssigned, "Syrian Arab Republic"),
    Country::new("SZ", Status::OfficiallyAssigned, "Eswatini"),
    Country::new("TA", Status::ExceptionallyReserved, "Tristan da Cunha"),
    Country::new("TC", Status::OfficiallyAssigned, "Turks and Caicos Islands"),
    Country::new("TD", Status::OfficiallyAssigned, "Chad"),
    Country::new("TF", Status::OfficiallyAssigned, "French Southern Territories"),
    Country::new("TG", Status::OfficiallyAssigned, "Togo"),
    Country::new("TH", Status::OfficiallyAssigned, "Thailand"),
    Country::new("TJ", Status::OfficiallyAssigned, "Tajikistan"),
    Country::new("TK", Status::OfficiallyAssigned, "Tokelau"),
    Country::new("TL", Status::OfficiallyAssigned, "Timor-Leste"),
    Country::new("TM", Status::OfficiallyAssigned, "Turkmenistan"),
    Country::new("TN", Status::OfficiallyAssigned, "Tunisia"),
    Country::new("TO", Status::OfficiallyAssigned, "Tonga"),
    Country::new("TP", Status::TransitionallyReserved, "East Timor"),
    Country::new("TR", Status::OfficiallyAssigned, "Türkiye"),
    Country::new("TT", Status::OfficiallyAssigned, "Trinidad and Tobago"),
    Country::new("TV", Status::OfficiallyAssigned, "Tuvalu"),
    Country::new("TW", Status::OfficiallyAssigned, "Taiwan"),
    Country::new("TZ", Status::OfficiallyAssigned, "Tanzania"),
    Country::new("UA", Status::OfficiallyAssigned, "Ukraine"),
    Country::new("UG", Status::OfficiallyAssigned, "Uganda"),
    Country::new("UK", Status::ExceptionallyReserved, "United Kingdom"),
    Country::new("UM", Status::OfficiallyAssigned, "United States Minor Outlying Islands"),
    Country::new("UN", Status::ExceptionallyReserved, "United Nations"),
    Country::new("US", Status::OfficiallyAssigned, "United States of America"),
    Country::new("UY", Status::OfficiallyAssigned, "Uruguay"),
    Country::new("UZ", Status::OfficiallyAssigned, "Uzbekistan"),
    Country::new("VA", Status::OfficiallyAssigned, "Holy See"),
    Country::new("VC", Status::OfficiallyAssigned, "Saint Vincent and the Grenadines"),
    Country::new("VD", Status::FormerlyAssigned, "Viet-Nam, Democratic Republic of"),
    Country::new("VE", Status::OfficiallyAssigned, "Venezuela"),
    Country::new("VG", Status::OfficiallyAssigned, "Virgin Islands (British)"),
    Country::new("VI", Status::OfficiallyAssigned, "Virgin Islands (U.S.)"),
    Country::new("VN", Status::OfficiallyAssigned, "Viet Nam"),
    Country::new("VU", Status::OfficiallyAssigned, "Vanuatu"),
    Country::new("WF", Status::OfficiallyAssigned, "Wallis and Futuna"),
    Country::new("WG", Status::IndeterminatelyReserved, "Grenada"),
    Country::new("WK", Status::FormerlyAssigned, "Wake Island"),
    Country::new("WL", Status::IndeterminatelyReserved, "Saint Lucia"),
    Country::new("WS", Status::OfficiallyAssigned, "Samoa"),
    Country::new("WV", Status::IndeterminatelyReserved, "Saint Vincent"),
    Country::new("XK", Status::UserAssigned, "Kosovo"),
    Country::new("YD", Status::FormerlyAssigned, "Yemen, Democratic"),
    Country::new("YE", Status::OfficiallyAssigned, "Yemen"),
    Country::new("YT", Status::OfficiallyAssigned, "Mayotte"),
    Country::new("YU", Status::TransitionallyReserved, "Yugoslavia"),
    Country::new("YV", Status::IndeterminatelyReserved, "Venezuela"),
    Country::new("ZA", Status::OfficiallyAssigned, "South Africa"),
    Country::new("ZM", Status::OfficiallyAssigned, "Zambia"),
    Country::new("ZR", Status::FormerlyAssigned, "Zaire"),
    Country::new("ZW", Status::OfficiallyAssigned, "Zimbabwe"),
];
