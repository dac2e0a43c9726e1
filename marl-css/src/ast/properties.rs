macro_rules! known_properties {
    ($($text:literal => $variant:ident,)*) => {
        /// A recognized CSS property name. The raw key text is kept
        /// alongside on the declaration, so this is a classification, not
        /// a replacement.
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum Property {
            /// A key that is not a recognized property name.
            Unknown,
            $($variant,)*
        }

        impl Property {
            /// Look up a decoded declaration key. Custom properties and
            /// unrecognized names map to [`Property::Unknown`].
            pub fn from_text(text: &str) -> Property {
                match text {
                    $($text => Property::$variant,)*
                    _ => Property::Unknown,
                }
            }

            pub fn as_text(self) -> Option<&'static str> {
                match self {
                    Property::Unknown => None,
                    $(Property::$variant => Some($text),)*
                }
            }
        }
    };
}

known_properties! {
    "align-content" => AlignContent,
    "align-items" => AlignItems,
    "align-self" => AlignSelf,
    "animation" => Animation,
    "animation-delay" => AnimationDelay,
    "animation-direction" => AnimationDirection,
    "animation-duration" => AnimationDuration,
    "animation-fill-mode" => AnimationFillMode,
    "animation-iteration-count" => AnimationIterationCount,
    "animation-name" => AnimationName,
    "animation-play-state" => AnimationPlayState,
    "animation-timing-function" => AnimationTimingFunction,
    "appearance" => Appearance,
    "backdrop-filter" => BackdropFilter,
    "backface-visibility" => BackfaceVisibility,
    "background" => Background,
    "background-attachment" => BackgroundAttachment,
    "background-clip" => BackgroundClip,
    "background-color" => BackgroundColor,
    "background-image" => BackgroundImage,
    "background-origin" => BackgroundOrigin,
    "background-position" => BackgroundPosition,
    "background-repeat" => BackgroundRepeat,
    "background-size" => BackgroundSize,
    "border" => Border,
    "border-bottom" => BorderBottom,
    "border-bottom-color" => BorderBottomColor,
    "border-bottom-left-radius" => BorderBottomLeftRadius,
    "border-bottom-right-radius" => BorderBottomRightRadius,
    "border-bottom-style" => BorderBottomStyle,
    "border-bottom-width" => BorderBottomWidth,
    "border-collapse" => BorderCollapse,
    "border-color" => BorderColor,
    "border-image" => BorderImage,
    "border-left" => BorderLeft,
    "border-left-color" => BorderLeftColor,
    "border-left-style" => BorderLeftStyle,
    "border-left-width" => BorderLeftWidth,
    "border-radius" => BorderRadius,
    "border-right" => BorderRight,
    "border-right-color" => BorderRightColor,
    "border-right-style" => BorderRightStyle,
    "border-right-width" => BorderRightWidth,
    "border-spacing" => BorderSpacing,
    "border-style" => BorderStyle,
    "border-top" => BorderTop,
    "border-top-color" => BorderTopColor,
    "border-top-left-radius" => BorderTopLeftRadius,
    "border-top-right-radius" => BorderTopRightRadius,
    "border-top-style" => BorderTopStyle,
    "border-top-width" => BorderTopWidth,
    "border-width" => BorderWidth,
    "bottom" => Bottom,
    "box-shadow" => BoxShadow,
    "box-sizing" => BoxSizing,
    "caret-color" => CaretColor,
    "clear" => Clear,
    "clip" => Clip,
    "clip-path" => ClipPath,
    "color" => Color,
    "column-count" => ColumnCount,
    "column-gap" => ColumnGap,
    "content" => Content,
    "cursor" => Cursor,
    "direction" => Direction,
    "display" => Display,
    "filter" => Filter,
    "flex" => Flex,
    "flex-basis" => FlexBasis,
    "flex-direction" => FlexDirection,
    "flex-flow" => FlexFlow,
    "flex-grow" => FlexGrow,
    "flex-shrink" => FlexShrink,
    "flex-wrap" => FlexWrap,
    "float" => Float,
    "font" => Font,
    "font-family" => FontFamily,
    "font-size" => FontSize,
    "font-style" => FontStyle,
    "font-variant" => FontVariant,
    "font-weight" => FontWeight,
    "gap" => Gap,
    "grid" => Grid,
    "grid-area" => GridArea,
    "grid-auto-columns" => GridAutoColumns,
    "grid-auto-flow" => GridAutoFlow,
    "grid-auto-rows" => GridAutoRows,
    "grid-column" => GridColumn,
    "grid-gap" => GridGap,
    "grid-row" => GridRow,
    "grid-template" => GridTemplate,
    "grid-template-areas" => GridTemplateAreas,
    "grid-template-columns" => GridTemplateColumns,
    "grid-template-rows" => GridTemplateRows,
    "height" => Height,
    "inset" => Inset,
    "justify-content" => JustifyContent,
    "justify-items" => JustifyItems,
    "justify-self" => JustifySelf,
    "left" => Left,
    "letter-spacing" => LetterSpacing,
    "line-height" => LineHeight,
    "list-style" => ListStyle,
    "list-style-image" => ListStyleImage,
    "list-style-position" => ListStylePosition,
    "list-style-type" => ListStyleType,
    "margin" => Margin,
    "margin-bottom" => MarginBottom,
    "margin-left" => MarginLeft,
    "margin-right" => MarginRight,
    "margin-top" => MarginTop,
    "mask" => Mask,
    "max-height" => MaxHeight,
    "max-width" => MaxWidth,
    "min-height" => MinHeight,
    "min-width" => MinWidth,
    "object-fit" => ObjectFit,
    "object-position" => ObjectPosition,
    "opacity" => Opacity,
    "order" => Order,
    "outline" => Outline,
    "outline-color" => OutlineColor,
    "outline-offset" => OutlineOffset,
    "outline-style" => OutlineStyle,
    "outline-width" => OutlineWidth,
    "overflow" => Overflow,
    "overflow-x" => OverflowX,
    "overflow-y" => OverflowY,
    "padding" => Padding,
    "padding-bottom" => PaddingBottom,
    "padding-left" => PaddingLeft,
    "padding-right" => PaddingRight,
    "padding-top" => PaddingTop,
    "perspective" => Perspective,
    "pointer-events" => PointerEvents,
    "position" => Position,
    "quotes" => Quotes,
    "resize" => Resize,
    "right" => Right,
    "row-gap" => RowGap,
    "scroll-behavior" => ScrollBehavior,
    "tab-size" => TabSize,
    "table-layout" => TableLayout,
    "text-align" => TextAlign,
    "text-decoration" => TextDecoration,
    "text-decoration-color" => TextDecorationColor,
    "text-decoration-line" => TextDecorationLine,
    "text-decoration-style" => TextDecorationStyle,
    "text-indent" => TextIndent,
    "text-overflow" => TextOverflow,
    "text-shadow" => TextShadow,
    "text-transform" => TextTransform,
    "top" => Top,
    "transform" => Transform,
    "transform-origin" => TransformOrigin,
    "transform-style" => TransformStyle,
    "transition" => Transition,
    "transition-delay" => TransitionDelay,
    "transition-duration" => TransitionDuration,
    "transition-property" => TransitionProperty,
    "transition-timing-function" => TransitionTimingFunction,
    "user-select" => UserSelect,
    "vertical-align" => VerticalAlign,
    "visibility" => Visibility,
    "white-space" => WhiteSpace,
    "width" => Width,
    "will-change" => WillChange,
    "word-break" => WordBreak,
    "word-spacing" => WordSpacing,
    "writing-mode" => WritingMode,
    "z-index" => ZIndex,
}
