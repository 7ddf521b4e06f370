use charming::{
    component::{
        Axis, DataView, DataZoom, DataZoomType, Feature, Grid, Legend, LegendSelectedMode,
        LegendType, Restore, SaveAsImage, Title, Toolbox, ToolboxDataZoom,
    },
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, NameLocation,
        Orient, SplitLine, Symbol, TextAlign, TextStyle, Tooltip,
    },
    series::{Bar, Line},
    Chart,
};

/// Interactive chart rendered to HTML next to the PNG report.
pub struct TlsChart {
    pub inner: Chart,
}

const AXIS_TEXT_SIZE: u32 = 16;

impl TlsChart {
    /// Create a new `TlsChart` with default tooltip, legend, grid, and toolbox.
    pub fn new(title: &str, subtext: &str, dark: bool) -> Self {
        let chart = Chart::new()
            .title(
                Title::new()
                    .text(title)
                    .text_align(TextAlign::Center)
                    .subtext(subtext)
                    .text_style(TextStyle::new().font_size(24).font_weight("bold"))
                    .subtext_style(TextStyle::new().font_size(14).line_height(20))
                    .left("50%")
                    .top("1%"),
            )
            .tooltip(Tooltip::new().axis_pointer(AxisPointer::new().type_(AxisPointerType::Cross)))
            .legend(
                Legend::new()
                    .show(true)
                    .right("2%")
                    .top("middle")
                    .orient(Orient::Vertical)
                    .selected_mode(LegendSelectedMode::Multiple)
                    .text_style(TextStyle::new().font_size(12))
                    .padding(10)
                    .item_gap(10)
                    .item_width(25)
                    .item_height(14)
                    .type_(LegendType::Scroll),
            )
            .grid(Grid::new().left("6%").right("16%").top("14%").bottom("10%"))
            .data_zoom(
                DataZoom::new()
                    .show(true)
                    .type_(DataZoomType::Slider)
                    .bottom("2%")
                    .start(0)
                    .end(100),
            )
            .toolbox(
                Toolbox::new().feature(
                    Feature::new()
                        .data_zoom(ToolboxDataZoom::new())
                        .data_view(DataView::new())
                        .restore(Restore::new())
                        .save_as_image(SaveAsImage::new()),
                ),
            );

        let chart = if dark {
            chart.background_color("#242424")
        } else {
            chart
        };

        Self { inner: chart }
    }

    fn value_axis(axis_label: &str, log: bool) -> Axis {
        Axis::new()
            .type_(if log { AxisType::Log } else { AxisType::Value })
            .name(axis_label)
            .name_location(NameLocation::End)
            .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
            .name_gap(15)
            .axis_label(AxisLabel::new())
            .split_line(SplitLine::new().show(true))
    }

    /// Configure a numeric X axis, e.g. file size in MB.
    pub fn with_value_x_axis(mut self, axis_label: &str, log: bool) -> Self {
        self.inner = self.inner.x_axis(Self::value_axis(axis_label, log));
        self
    }

    /// Configure the X axis (category axis).
    pub fn with_category_x_axis(mut self, axis_label: &str, categories: Vec<String>) -> Self {
        self.inner = self.inner.x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name(axis_label)
                .name_location(NameLocation::End)
                .name_text_style(TextStyle::new().font_size(AXIS_TEXT_SIZE))
                .name_gap(15)
                .data(categories)
                .split_line(SplitLine::new().show(true)),
        );
        self
    }

    /// Configure a Y axis for e.g. throughput in Mbps or duration in ms.
    pub fn with_y_axis(mut self, axis_label: &str, log: bool) -> Self {
        self.inner = self
            .inner
            .y_axis(Self::value_axis(axis_label, log).position("left"));
        self
    }

    /// Add a line series. `points` is a list of `[x, y]` pairs.
    pub fn add_series(
        mut self,
        name: &str,
        points: Vec<Vec<f64>>,
        symbol: Symbol,
        color: &str,
    ) -> Self {
        let line = Line::new()
            .name(name)
            .data(points)
            .symbol(symbol)
            .symbol_size(8.0)
            .line_style(LineStyle::new().width(3.0))
            .item_style(ItemStyle::new().color(color));

        self.inner = self.inner.series(line);
        self
    }

    /// Add a thin translucent line without markers, e.g. a zero baseline.
    pub fn add_reference_line(mut self, name: &str, points: Vec<Vec<f64>>, opacity: f64) -> Self {
        let line = Line::new()
            .name(name)
            .data(points)
            .show_symbol(false)
            .line_style(LineStyle::new().width(1).opacity(opacity))
            .item_style(ItemStyle::new().color("#888888"));

        self.inner = self.inner.series(line);
        self
    }

    pub fn add_bar_series(mut self, name: &str, data: Vec<f64>, color: &str) -> Self {
        let bar = Bar::new()
            .name(name)
            .data(data)
            .item_style(ItemStyle::new().color(color));

        self.inner = self.inner.series(bar);
        self
    }
}
