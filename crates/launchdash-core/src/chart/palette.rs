/// Plotly's default qualitative color sequence.
pub const QUALITATIVE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

pub fn color_for(index: usize) -> &'static str {
    QUALITATIVE[index % QUALITATIVE.len()]
}
