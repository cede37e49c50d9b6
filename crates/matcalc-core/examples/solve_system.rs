use matcalc_core::math::Matrix;
use matcalc_core::ops;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 2x + y = 5
    //  x + 2y = 4
    let a = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 2.0]])?;
    let b = Matrix::from_rows(&[vec![5.0], vec![4.0]])?;

    println!("A:\n{}", a);
    println!("b:\n{}", b);
    println!("det(A) = {:.4}", ops::determinant(&a)?);

    let a_inv = ops::inverse(&a)?;
    let x = ops::multiply(&a_inv, &b)?;
    println!("x = A⁻¹ b:\n{}", x);

    let check = ops::multiply(&a, &x)?;
    println!("A x:\n{}", check);
    assert_eq!(check, b);

    Ok(())
}
