use super::*;
use approx::assert_relative_eq;
use ndarray::{array, Array2};

// W = I (2x2), X = [[1, 2]], y = [0]: scores [1, 2], loss = ln(1 + e).
fn known_problem() -> (Array2<f64>, Array2<f64>, Vec<usize>) {
    (array![[1.0, 0.0], [0.0, 1.0]], array![[1.0, 2.0]], vec![0])
}

#[test]
fn test_naive_known_loss_and_grad() -> Result<(), SoftmaxError> {
    let (w, x, y) = known_problem();
    let (loss, grad) = softmax_loss_naive(&w, &x, &y, 0.0)?;

    let e = 1.0f64.exp();
    assert_relative_eq!(loss, (1.0 + e).ln(), epsilon = 1e-12);

    let p0 = 1.0 / (1.0 + e);
    let p1 = e / (1.0 + e);
    let expected = array![[p0 - 1.0, p1], [2.0 * (p0 - 1.0), 2.0 * p1]];
    assert_eq!(grad.shape(), w.shape());
    for (g, ex) in grad.iter().zip(expected.iter()) {
        assert_relative_eq!(*g, *ex, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_naive_regularization_terms() -> Result<(), SoftmaxError> {
    let (w, x, y) = known_problem();
    let (loss_plain, grad_plain) = softmax_loss_naive(&w, &x, &y, 0.0)?;
    let (loss_reg, grad_reg) = softmax_loss_naive(&w, &x, &y, 0.5)?;

    // reg * sum(W * W) = 0.5 * 2
    assert_relative_eq!(loss_reg - loss_plain, 1.0, epsilon = 1e-12);
    // 2 * reg * W = W
    let diff = &grad_reg - &grad_plain;
    for (d, wv) in diff.iter().zip(w.iter()) {
        assert_relative_eq!(*d, *wv, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_naive_batch_is_mean_of_examples() -> Result<(), SoftmaxError> {
    let w = array![[0.2, -0.1, 0.4], [0.0, 0.3, -0.2]];
    let x = array![[1.0, 2.0], [-1.0, 0.5]];
    let y = vec![2, 1];

    let (loss_a, grad_a) = softmax_loss_naive(&w, &x.slice(ndarray::s![0..1, ..]), &y[0..1], 0.0)?;
    let (loss_b, grad_b) = softmax_loss_naive(&w, &x.slice(ndarray::s![1..2, ..]), &y[1..2], 0.0)?;
    let (loss, grad) = softmax_loss_naive(&w, &x, &y, 0.0)?;

    assert_relative_eq!(loss, (loss_a + loss_b) / 2.0, epsilon = 1e-12);
    let mean_grad = (&grad_a + &grad_b) / 2.0;
    for (g, m) in grad.iter().zip(mean_grad.iter()) {
        assert_relative_eq!(*g, *m, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_naive_single_class_only_regularization() -> Result<(), SoftmaxError> {
    let w = array![[0.5], [-1.5], [2.0]];
    let x = array![[3.0, 1.0, -4.0]];
    let (loss, grad) = softmax_loss_naive(&w, &x, &[0], 0.25)?;

    assert_relative_eq!(loss, 0.25 * (0.25 + 2.25 + 4.0), epsilon = 1e-12);
    for (g, wv) in grad.iter().zip(w.iter()) {
        assert_relative_eq!(*g, 0.5 * wv, epsilon = 1e-12);
    }
    Ok(())
}

#[test]
fn test_naive_large_scores_stay_finite() -> Result<(), SoftmaxError> {
    let w = array![[1000.0, 0.0], [0.0, 1000.0]];
    let x = array![[1.0, 1.0], [2.0, 0.0]];
    let (loss, grad) = softmax_loss_naive(&w, &x, &[0, 1], 0.0)?;

    // First example: equal scores -> ln 2. Second: correct class 2000 below -> ~2000.
    assert_relative_eq!(loss, (2.0f64.ln() + 2000.0) / 2.0, epsilon = 1e-9);
    assert!(grad.iter().all(|g| g.is_finite()));
    Ok(())
}

#[test]
fn test_naive_f32() -> Result<(), SoftmaxError> {
    let w = array![[1.0f32, 0.0], [0.0, 1.0]];
    let x = array![[1.0f32, 2.0]];
    let (loss, grad) = softmax_loss_naive(&w, &x, &[0], 0.0f32)?;
    assert_relative_eq!(loss, (1.0f32 + 1.0f32.exp()).ln(), epsilon = 1e-5);
    assert_eq!(grad.dim(), (2, 2));
    Ok(())
}

#[test]
fn test_naive_shape_mismatch() {
    let w = Array2::<f64>::zeros((3, 2));
    let x = Array2::<f64>::zeros((4, 2));
    let result = softmax_loss_naive(&w, &x, &[0, 0, 0, 0], 0.0);
    assert!(matches!(result.err().unwrap(), SoftmaxError::ShapeMismatch { .. }));
}

#[test]
fn test_naive_label_out_of_range() {
    let w = Array2::<f64>::zeros((2, 3));
    let x = Array2::<f64>::zeros((2, 2));
    let result = softmax_loss_naive(&w, &x, &[1, 3], 0.0);
    match result {
        Err(SoftmaxError::IndexOutOfRange {
            example,
            label,
            num_classes,
            ..
        }) => {
            assert_eq!(example, 1);
            assert_eq!(label, 3);
            assert_eq!(num_classes, 3);
        }
        other => panic!("Expected IndexOutOfRange, got {:?}", other),
    }
}
