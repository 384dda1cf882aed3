//! Simple macros for flat appendable structs.

/// Generates a struct whose fields are appended one after another, with
/// [`Appendable`](crate::Appendable) and [`Decodable`](crate::Decodable)
/// impls, so each field must implement both.
#[macro_export]
macro_rules! impl_appendable_flat_struct {
    {
        $( #[ $sattr:meta ] )*
        $v:vis struct $name:ident {
            $(
                $( #[ $fattr:meta ] )*
                $fname:ident : $fty:ty,
            )*
        }
    } => {
        $( #[ $sattr ] )*
        $v struct $name {
            $(
                $( #[ $fattr ] )*
                $fname : $fty,
            )*
        }

        impl $name {
            $v fn new($( $fname : $fty ),*) -> Self {
                Self { $( $fname ),* }
            }

            $(
                $v fn $fname(&self) -> &$fty {
                    &self.$fname
                }
            )*
        }

        impl $crate::Appendable for $name {
            fn append_to(&self, builder: &mut $crate::ByteBuilder) -> $crate::BuilderResult<()> {
                $(<$fty as $crate::Appendable>::append_to(&self.$fname, builder)?;)*
                Ok(())
            }
        }

        impl $crate::Decodable for $name {
            fn read_from<B: AsRef<[u8]>>(
                reader: &mut $crate::ByteReader<B>,
            ) -> $crate::ReadResult<Self> {
                $(
                    let $fname = <$fty as $crate::Decodable>::read_from(reader)?;
                )*
                Ok(Self::new($($fname),*))
            }
        }
    }
}
